//! Wire models for the investment backend's JSON API.

use serde::{Deserialize, Serialize};

/// Aggregate financial summary for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    #[serde(default)]
    pub user_id: String,
    pub total_assets: f64,
    pub available_balance: f64,
    pub asset_allocation: AssetAllocation,
}

/// Allocation breakdown in percent. The values are independent readings and
/// are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub other: f64,
}

/// A single fund position owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub fund_type: String,
    pub quantity: f64,
    pub cost_price: f64,
    pub current_price: f64,
    pub market_value: f64,
    pub return_rate: f64,
}

/// A market index snapshot. The same record doubles as the purchase-selection
/// entity, so it carries the fund's net asset value alongside the index data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default)]
    pub current_nav: f64,
}

/// One point of an index trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub time: String,
    pub value: f64,
}

/// Response payload of a deposit. Carries only the updated balance; the rest
/// of the overview is reconciled with a follow-up fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositReceipt {
    pub available_balance: f64,
}

/// A public-good project open for contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationProject {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub current_virtual_amount: f64,
    pub target_amount: f64,
    #[serde(default)]
    pub real_donated_amount: f64,
}

impl DonationProject {
    /// Funding progress in [0.0, 1.0].
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_virtual_amount / self.target_amount).clamp(0.0, 1.0)
    }
}

/// A single entry in the user's contribution history. The backend populates
/// the project reference with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub project_id: ProjectRef,
    pub virtual_amount: f64,
    #[serde(default)]
    pub real_amount_equivalent: f64,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Backend payloads use camelCase field names; make sure they map.
    fn test_overview_deserializes_from_backend_payload() {
        let payload = r#"{
            "userId": "user-1138",
            "totalAssets": 125000.5,
            "availableBalance": 1500.0,
            "assetAllocation": { "stocks": 40, "bonds": 30, "cash": 20, "other": 10 }
        }"#;
        let overview: UserOverview = serde_json::from_str(payload).unwrap();
        assert_eq!(overview.user_id, "user-1138");
        assert_eq!(overview.available_balance, 1500.0);
        assert_eq!(overview.asset_allocation.bonds, 30.0);
    }

    #[test]
    fn test_fund_deserializes_with_mongo_style_id() {
        let payload = r#"{
            "_id": "F1",
            "code": "000300",
            "name": "CSI 300",
            "category": "Equity",
            "value": 3521.4,
            "change": -12.3,
            "changePercent": -0.35,
            "currentNav": 1.2345
        }"#;
        let fund: Fund = serde_json::from_str(payload).unwrap();
        assert_eq!(fund.id, "F1");
        assert_eq!(fund.change_percent, -0.35);
        assert_eq!(fund.current_nav, 1.2345);
    }

    #[test]
    fn test_holding_maps_reserved_type_field() {
        let payload = r#"{
            "code": "F7", "name": "Stable Bond A", "type": "Bond",
            "quantity": 100.0, "costPrice": 1.0, "currentPrice": 1.1,
            "marketValue": 110.0, "returnRate": 10.0
        }"#;
        let holding: Holding = serde_json::from_str(payload).unwrap();
        assert_eq!(holding.fund_type, "Bond");
        assert_eq!(holding.market_value, 110.0);
    }

    #[test]
    fn test_donation_project_progress_is_clamped() {
        let mut project = DonationProject {
            id: "p1".to_string(),
            name: "Clean Water".to_string(),
            description: String::new(),
            image_url: None,
            current_virtual_amount: 15_000.0,
            target_amount: 10_000.0,
            real_donated_amount: 0.0,
        };
        assert_eq!(project.progress(), 1.0);

        project.target_amount = 0.0;
        assert_eq!(project.progress(), 0.0);
    }
}
