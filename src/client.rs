use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::{
    error::{AppError, ErrorResponse, Result},
    models::{Billboard, CreatedResponse, MaintenanceRow, MaintenanceUpdate, NewMaintenance},
    store::MaintenanceStore,
};

/// Maintenance store that talks to the server's JSON API
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-success responses into the matching AppError
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };

        Err(match status {
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::BadRequest(message)
            }
            _ => AppError::Internal(format!("{status}: {message}")),
        })
    }
}

#[async_trait]
impl MaintenanceStore for HttpStore {
    async fn list_maintenance(&self) -> Result<Vec<MaintenanceRow>> {
        let response = self.client.get(self.url("/api/maintenance")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn list_billboards(&self) -> Result<Vec<Billboard>> {
        let response = self.client.get(self.url("/api/billboards")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn insert_maintenance(&self, record: NewMaintenance) -> Result<i64> {
        let response = self
            .client
            .post(self.url("/api/maintenance"))
            .json(&record)
            .send()
            .await?;
        let created: CreatedResponse = Self::check(response).await?.json().await?;
        Ok(created.id)
    }

    async fn update_maintenance(&self, id: i64, update: MaintenanceUpdate) -> Result<()> {
        let response = self
            .client
            .patch(self.url(&format!("/api/maintenance/{id}")))
            .json(&update)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_maintenance(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/maintenance/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
