use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use crate::model::RawBill;

pub const API_BASE_URL: &str = "http://localhost:5678";

/// Fetch failure surfaced to the view layer. The display form is shown to
/// the user unmodified so a failing backend stays diagnosable from the UI.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FetchError {
    #[error("Erreur {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
}

/// Async access to the bill collection, object-safe so the bills controller
/// can run against test doubles.
#[async_trait(?Send)]
pub trait BillsGateway {
    async fn list(&self) -> Result<Vec<RawBill>, FetchError>;
}

/// HTTP gateway to the remote data store.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiStore {
    base_url: String,
}

impl ApiStore {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }
}

impl Default for ApiStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BillsGateway for ApiStore {
    async fn list(&self) -> Result<Vec<RawBill>, FetchError> {
        let url = format!("{}/bills", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        response
            .json::<Vec<RawBill>>()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}
