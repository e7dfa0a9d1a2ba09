//! Dashboard data controller
//!
//! Owns the fetch/refresh/mutate lifecycle for all dashboard state. Render
//! code only ever sees snapshots taken from the shared container; every
//! mutation goes through one of the operations below.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::models::{
    DepositReceipt, DonationProject, DonationRecord, Fund, Holding, TrendPoint, UserOverview,
};
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use thiserror::Error;

/// Handle to the in-memory state container shared between the controller,
/// the refresh worker, and the UI.
pub type SharedDashboardData = Arc<RwLock<DashboardData>>;

/// All client-visible dashboard state.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub overview: Option<UserOverview>,
    pub holdings: Vec<Holding>,
    pub funds: Vec<Fund>,
    pub trends: Vec<TrendPoint>,
    pub projects: Vec<DonationProject>,
    pub contributions: Vec<DonationRecord>,
    /// Set once the initial batch has landed. Rendering is gated on this so
    /// the first paint sees a complete batch.
    pub loaded: bool,
    /// Donation state loads separately and never gates the dashboard.
    pub donations_loaded: bool,
}

#[derive(Debug, Error)]
pub enum TransactionError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TransactionError {
    /// A message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            TransactionError::Invalid(msg) => msg.clone(),
            TransactionError::Api(err) => err.user_message(),
        }
    }
}

/// Parse a user-entered amount. Empty, non-numeric, and non-positive inputs
/// are rejected here so no request is ever issued for them.
pub fn parse_amount(input: &str) -> Result<f64, TransactionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TransactionError::Invalid(
            "Please enter an amount.".to_string(),
        ));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| TransactionError::Invalid("The amount must be a number.".to_string()))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TransactionError::Invalid(
            "The amount must be greater than zero.".to_string(),
        ));
    }
    Ok(amount)
}

#[derive(Clone)]
pub struct DashboardController {
    api: Arc<dyn DashboardApi>,
    user_id: String,
    data: SharedDashboardData,
}

impl DashboardController {
    pub fn new(api: Arc<dyn DashboardApi>, user_id: String) -> Self {
        Self {
            api,
            user_id,
            data: Arc::new(RwLock::new(DashboardData::default())),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Handle to the shared state container.
    pub fn data(&self) -> SharedDashboardData {
        Arc::clone(&self.data)
    }

    /// Clone of the current state, for rendering.
    pub fn snapshot(&self) -> DashboardData {
        self.data
            .read()
            .expect("dashboard state lock poisoned")
            .clone()
    }

    fn write(&self) -> RwLockWriteGuard<'_, DashboardData> {
        self.data.write().expect("dashboard state lock poisoned")
    }

    /// Fetch all four dashboard slices concurrently. Any failure aborts the
    /// load and leaves the container unpublished (`loaded` stays false).
    pub async fn load_initial(&self) -> Result<(), ApiError> {
        let (overview, holdings, funds, trends) = tokio::try_join!(
            self.api.user_overview(&self.user_id),
            self.api.holdings(&self.user_id),
            self.api.market_funds(),
            self.api.index_trends(),
        )?;

        let mut data = self.write();
        data.overview = Some(overview);
        data.holdings = holdings;
        data.funds = funds;
        data.trends = trends;
        data.loaded = true;
        Ok(())
    }

    /// Re-fetch the volatile market slices and replace them wholesale.
    /// Called by the refresh worker on every tick; the caller decides how to
    /// report a failure.
    pub async fn refresh_market(&self) -> Result<usize, ApiError> {
        let (funds, trends) =
            tokio::try_join!(self.api.market_funds(), self.api.index_trends())?;

        let count = funds.len();
        let mut data = self.write();
        data.funds = funds;
        data.trends = trends;
        Ok(count)
    }

    /// Fetch donation projects and the user's contribution history. Failures
    /// do not gate the dashboard.
    pub async fn load_donations(&self) -> Result<usize, ApiError> {
        let (projects, contributions) = tokio::try_join!(
            self.api.donation_projects(),
            self.api.my_contributions(&self.user_id),
        )?;

        let count = projects.len();
        let mut data = self.write();
        data.projects = projects;
        data.contributions = contributions;
        data.donations_loaded = true;
        Ok(count)
    }

    /// Submit a deposit. The receipt's balance is applied as a partial update,
    /// then the full overview is re-fetched once to reconcile side effects the
    /// receipt does not carry (interest, fees, total-asset recompute).
    pub async fn deposit(&self, amount_input: &str) -> Result<DepositReceipt, TransactionError> {
        let amount = parse_amount(amount_input)?;

        let receipt = self.api.deposit(&self.user_id, amount).await?;
        {
            let mut data = self.write();
            if let Some(overview) = data.overview.as_mut() {
                overview.available_balance = receipt.available_balance;
            }
        }

        let overview = self.api.user_overview(&self.user_id).await?;
        self.write().overview = Some(overview);
        Ok(receipt)
    }

    /// Submit a fund purchase, then re-fetch overview and holdings
    /// concurrently to reflect the new position.
    pub async fn purchase(
        &self,
        fund_id: &str,
        amount_input: &str,
    ) -> Result<(), TransactionError> {
        if fund_id.trim().is_empty() {
            return Err(TransactionError::Invalid(
                "Please select a fund.".to_string(),
            ));
        }
        let amount = parse_amount(amount_input)?;

        self.api.purchase(&self.user_id, fund_id, amount).await?;

        let (overview, holdings) = tokio::try_join!(
            self.api.user_overview(&self.user_id),
            self.api.holdings(&self.user_id),
        )?;
        let mut data = self.write();
        data.overview = Some(overview);
        data.holdings = holdings;
        Ok(())
    }

    /// Record a contribution, then re-fetch both donation slices.
    pub async fn contribute(
        &self,
        project_id: &str,
        amount_input: &str,
    ) -> Result<(), TransactionError> {
        if project_id.trim().is_empty() {
            return Err(TransactionError::Invalid(
                "Please select a project.".to_string(),
            ));
        }
        let virtual_amount = parse_amount(amount_input)?;

        self.api
            .contribute(&self.user_id, project_id, virtual_amount)
            .await?;

        self.load_donations().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::models::AssetAllocation;
    use mockall::predicate::eq;

    fn overview_with_balance(balance: f64) -> UserOverview {
        UserOverview {
            user_id: "user-1138".to_string(),
            total_assets: 125_000.0,
            available_balance: balance,
            asset_allocation: AssetAllocation {
                stocks: 40.0,
                bonds: 30.0,
                cash: 20.0,
                other: 10.0,
            },
        }
    }

    fn fund(id: &str, value: f64) -> Fund {
        Fund {
            id: id.to_string(),
            code: format!("00{}", id),
            name: format!("Fund {}", id),
            category: "Equity".to_string(),
            value,
            change: 1.0,
            change_percent: 0.1,
            current_nav: 1.0,
        }
    }

    fn controller_with(mock: MockDashboardApi) -> DashboardController {
        DashboardController::new(Arc::new(mock), "user-1138".to_string())
    }

    #[tokio::test]
    // Deposit "500" posts {amount: 500}, applies the receipt balance, then
    // re-fetches the overview exactly once.
    async fn test_deposit_applies_receipt_then_reconciles() {
        let mut mock = MockDashboardApi::new();
        mock.expect_deposit()
            .with(eq("user-1138"), eq(500.0))
            .times(1)
            .returning(|_, _| {
                Ok(DepositReceipt {
                    available_balance: 1500.0,
                })
            });
        mock.expect_user_overview()
            .with(eq("user-1138"))
            .times(1)
            .returning(|_| Ok(overview_with_balance(1500.0)));

        let controller = controller_with(mock);
        {
            let data = controller.data();
            data.write().unwrap().overview = Some(overview_with_balance(1000.0));
        }

        let receipt = controller.deposit("500").await.unwrap();
        assert_eq!(receipt.available_balance, 1500.0);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.overview.unwrap().available_balance, 1500.0);
    }

    #[tokio::test]
    // Invalid amounts are rejected before any network call. The mock has no
    // expectations, so any request would panic the test.
    async fn test_deposit_rejects_invalid_input_without_requests() {
        for input in ["", "   ", "abc", "-5", "0", "nan"] {
            let controller = controller_with(MockDashboardApi::new());
            let err = controller.deposit(input).await.unwrap_err();
            assert!(matches!(err, TransactionError::Invalid(_)), "{:?}", input);
        }
    }

    #[tokio::test]
    // A failed deposit leaves prior state unchanged and surfaces the
    // backend-supplied message.
    async fn test_deposit_failure_leaves_state_unchanged() {
        let mut mock = MockDashboardApi::new();
        mock.expect_deposit().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 400,
                message: r#"{"message":"Deposit limit exceeded"}"#.to_string(),
            })
        });

        let controller = controller_with(mock);
        {
            let data = controller.data();
            data.write().unwrap().overview = Some(overview_with_balance(1000.0));
        }

        let err = controller.deposit("500").await.unwrap_err();
        assert_eq!(err.user_message(), "Deposit limit exceeded");

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.overview.unwrap().available_balance, 1000.0);
    }

    #[tokio::test]
    // A successful purchase re-fetches overview and holdings once each.
    async fn test_purchase_reconciles_overview_and_holdings() {
        let mut mock = MockDashboardApi::new();
        mock.expect_purchase()
            .with(eq("user-1138"), eq("F1"), eq(2000.0))
            .times(1)
            .returning(|_, _, _| Ok(()));
        mock.expect_user_overview()
            .times(1)
            .returning(|_| Ok(overview_with_balance(3000.0)));
        mock.expect_holdings().times(1).returning(|_| {
            Ok(vec![Holding {
                code: "F1".to_string(),
                name: "Fund F1".to_string(),
                fund_type: "Equity".to_string(),
                quantity: 1000.0,
                cost_price: 2.0,
                current_price: 2.0,
                market_value: 2000.0,
                return_rate: 0.0,
            }])
        });

        let controller = controller_with(mock);
        controller.purchase("F1", "2000").await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.overview.unwrap().available_balance, 3000.0);
    }

    #[tokio::test]
    async fn test_purchase_requires_fund_selection() {
        let controller = controller_with(MockDashboardApi::new());
        let err = controller.purchase("  ", "2000").await.unwrap_err();
        assert!(matches!(err, TransactionError::Invalid(_)));
    }

    #[tokio::test]
    // The initial load is all-or-nothing: one rejected fetch publishes
    // nothing.
    async fn test_initial_load_is_all_or_nothing() {
        let mut mock = MockDashboardApi::new();
        mock.expect_user_overview()
            .returning(|_| Ok(overview_with_balance(1000.0)));
        mock.expect_holdings().returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: String::new(),
            })
        });
        mock.expect_market_funds()
            .returning(|| Ok(vec![fund("F1", 3500.0)]));
        mock.expect_index_trends().returning(|| Ok(vec![]));

        let controller = controller_with(mock);
        assert!(controller.load_initial().await.is_err());

        let snapshot = controller.snapshot();
        assert!(!snapshot.loaded);
        assert!(snapshot.overview.is_none());
        assert!(snapshot.funds.is_empty());
    }

    #[tokio::test]
    // Consecutive refreshes replace the snapshot wholesale; the second
    // payload wins with no merge artifacts from the first.
    async fn test_refresh_replaces_snapshot_wholesale() {
        let mut mock = MockDashboardApi::new();
        let mut tick = 0;
        mock.expect_market_funds().times(2).returning_st(move || {
            tick += 1;
            if tick == 1 {
                Ok(vec![fund("F1", 3500.0), fund("F2", 1200.0)])
            } else {
                Ok(vec![fund("F3", 980.0)])
            }
        });
        mock.expect_index_trends().times(2).returning(|| {
            Ok(vec![TrendPoint {
                time: "10:00".to_string(),
                value: 3500.0,
            }])
        });

        let controller = controller_with(mock);
        controller.refresh_market().await.unwrap();
        controller.refresh_market().await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.funds.len(), 1);
        assert_eq!(snapshot.funds[0].id, "F3");
    }

    #[test]
    fn test_parse_amount_accepts_positive_numbers() {
        assert_eq!(parse_amount("500").unwrap(), 500.0);
        assert_eq!(parse_amount(" 0.01 ").unwrap(), 0.01);
        assert!(parse_amount("1e3").is_ok());
    }
}
