//! Investment Backend Client
//!
//! A JSON client for the investment backend, covering account, market,
//! transaction, and donation endpoints.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::models::{
    DepositReceipt, DonationProject, DonationRecord, Fund, Holding, TrendPoint, UserOverview,
};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with the client version
const USER_AGENT: &str = concat!("fundwatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DepositRequest {
    amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseRequest<'a> {
    fund_id: &'a str,
    amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContributeRequest<'a> {
    project_id: &'a str,
    virtual_amount: f64,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post_json_no_response<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    async fn user_overview(&self, user_id: &str) -> Result<UserOverview, ApiError> {
        self.get_json(&format!("api/users/{}/overview", user_id))
            .await
    }

    async fn holdings(&self, user_id: &str) -> Result<Vec<Holding>, ApiError> {
        self.get_json(&format!("api/portfolio/{}/holdings", user_id))
            .await
    }

    async fn market_funds(&self) -> Result<Vec<Fund>, ApiError> {
        self.get_json("api/market/funds").await
    }

    async fn index_trends(&self) -> Result<Vec<TrendPoint>, ApiError> {
        self.get_json("api/market/trends").await
    }

    async fn deposit(&self, user_id: &str, amount: f64) -> Result<DepositReceipt, ApiError> {
        self.post_json(
            &format!("api/transactions/{}/deposit", user_id),
            &DepositRequest { amount },
        )
        .await
    }

    async fn purchase(&self, user_id: &str, fund_id: &str, amount: f64) -> Result<(), ApiError> {
        self.post_json_no_response(
            &format!("api/transactions/{}/purchase", user_id),
            &PurchaseRequest { fund_id, amount },
        )
        .await
    }

    async fn donation_projects(&self) -> Result<Vec<DonationProject>, ApiError> {
        self.get_json("api/donations/projects").await
    }

    async fn my_contributions(&self, user_id: &str) -> Result<Vec<DonationRecord>, ApiError> {
        self.get_json(&format!("api/donations/{}/my-contributions", user_id))
            .await
    }

    async fn contribute(
        &self,
        user_id: &str,
        project_id: &str,
        virtual_amount: f64,
    ) -> Result<(), ApiError> {
        self.post_json_no_response(
            &format!("api/donations/{}/contribute", user_id),
            &ContributeRequest {
                project_id,
                virtual_amount,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // URLs should join cleanly regardless of slashes on either side.
    fn test_build_url_joins_slashes() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "http://localhost:3001/".to_string(),
        });
        assert_eq!(
            client.build_url("/api/market/funds"),
            "http://localhost:3001/api/market/funds"
        );
        assert_eq!(
            client.build_url("api/market/trends"),
            "http://localhost:3001/api/market/trends"
        );
    }

    #[test]
    fn test_request_bodies_use_backend_field_names() {
        let body = serde_json::to_value(PurchaseRequest {
            fund_id: "F1",
            amount: 2000.0,
        })
        .unwrap();
        assert_eq!(body["fundId"], "F1");
        assert_eq!(body["amount"], 2000.0);

        let body = serde_json::to_value(ContributeRequest {
            project_id: "p1",
            virtual_amount: 10_000.0,
        })
        .unwrap();
        assert_eq!(body["projectId"], "p1");
        assert_eq!(body["virtualAmount"], 10_000.0);
    }
}
