use std::sync::Arc;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use reqwest::Client;

use crate::spendings::models::SpendingRecord;

use {error::*, models::*};

pub mod error;
pub mod models;

#[cfg(test)]
mod test;

pub type DynSpendingsApi = Arc<dyn SpendingsApi + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpendingsApi {
    async fn vehicle_spendings(&self, vehicle_id: i64, month: &str) -> Result<Vec<SpendingRecord>>;
    async fn toggle_mark(&self, id: i64) -> Result<ActionResponse>;
    async fn mark_paid(&self, id: i64, req: MarkPaidRequest) -> Result<ActionResponse>;
    async fn delete_spending(&self, id: i64) -> Result<ActionResponse>;
    async fn process_settlement(&self, req: SettlementRequest) -> Result<ActionResponse>;
}

pub struct HttpSpendingsApi {
    client: Client,
    base_url: String,
}

impl HttpSpendingsApi {
    pub fn new_dyn(client: Client, base_url: &str) -> DynSpendingsApi {
        Arc::new(HttpSpendingsApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    // All endpoints are checked for a success status before the body is
    // parsed, so transport and server failures surface as distinct errors
    async fn parse_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T> {
        if !res.status().is_success() {
            return Err(Error::StatusCodeFetchError(
                res.status(),
                res.text().await.unwrap_or(String::new()),
            ));
        }
        Ok(serde_json::from_str::<T>(&res.text().await?)?)
    }
}

#[async_trait]
impl SpendingsApi for HttpSpendingsApi {
    async fn vehicle_spendings(&self, vehicle_id: i64, month: &str) -> Result<Vec<SpendingRecord>> {
        let res = self
            .client
            .get(format!("{}/vehicle_spendings/{}", self.base_url, vehicle_id))
            .query(&[("month", month)])
            .send()
            .await?;
        Self::parse_response(res).await
    }

    async fn toggle_mark(&self, id: i64) -> Result<ActionResponse> {
        let res = self
            .client
            .post(format!("{}/toggle_mark", self.base_url))
            .json(&ToggleMarkRequest { id })
            .send()
            .await?;
        Self::parse_response(res).await
    }

    async fn mark_paid(&self, id: i64, req: MarkPaidRequest) -> Result<ActionResponse> {
        let res = self
            .client
            .post(format!("{}/mark_paid/{}", self.base_url, id))
            .json(&req)
            .send()
            .await?;
        Self::parse_response(res).await
    }

    async fn delete_spending(&self, id: i64) -> Result<ActionResponse> {
        let res = self
            .client
            .delete(format!("{}/delete_spending/{}", self.base_url, id))
            .send()
            .await?;
        Self::parse_response(res).await
    }

    async fn process_settlement(&self, req: SettlementRequest) -> Result<ActionResponse> {
        let res = self
            .client
            .post(format!("{}/process_settlement", self.base_url))
            .json(&req)
            .send()
            .await?;
        Self::parse_response(res).await
    }
}
