use crate::api::error::ApiError;
use crate::models::{
    DepositReceipt, DonationProject, DonationRecord, Fund, Holding, TrendPoint, UserOverview,
};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The backend surface the dashboard consumes. Kept behind a trait so the
/// controller and workers can run against a mock in tests.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetch the aggregate financial summary for a user.
    async fn user_overview(&self, user_id: &str) -> Result<UserOverview, ApiError>;

    /// Fetch the user's fund positions.
    async fn holdings(&self, user_id: &str) -> Result<Vec<Holding>, ApiError>;

    /// Fetch the current market index snapshot (also the purchasable fund list).
    async fn market_funds(&self) -> Result<Vec<Fund>, ApiError>;

    /// Fetch the index trend series.
    async fn index_trends(&self) -> Result<Vec<TrendPoint>, ApiError>;

    /// Submit a deposit. Returns the updated available balance only.
    async fn deposit(&self, user_id: &str, amount: f64) -> Result<DepositReceipt, ApiError>;

    /// Submit a fund purchase.
    async fn purchase(&self, user_id: &str, fund_id: &str, amount: f64) -> Result<(), ApiError>;

    /// List public-good projects open for contributions.
    async fn donation_projects(&self) -> Result<Vec<DonationProject>, ApiError>;

    /// List the user's contribution history.
    async fn my_contributions(&self, user_id: &str) -> Result<Vec<DonationRecord>, ApiError>;

    /// Record a contribution against a project.
    async fn contribute(
        &self,
        user_id: &str,
        project_id: &str,
        virtual_amount: f64,
    ) -> Result<(), ApiError>;
}
