use async_trait::async_trait;
use bmiadvisor_model::wire::{CategoryTable, ErrorResponse, Health, Prediction, PredictionRequest};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request: {0}")]
    RequestError(String),
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<Prediction>;
    async fn predict_diet(&self, request: &PredictionRequest) -> Result<Prediction>;
    async fn health(&self) -> Result<Health>;
    async fn bmi_categories(&self) -> Result<CategoryTable>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    async fn parse<T: DeserializeOwned>(
        response: reqwest::Result<reqwest::Response>,
    ) -> Result<T> {
        let response = response.map_err(|_| Error::CommunicationError)?;
        let status = response.status();
        if status.is_client_error() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            Err(Error::RequestError(message))
        } else if status.is_server_error() {
            Err(Error::InternalServerError)
        } else {
            response.json().await.map_err(|_| Error::ResponseError)
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

#[async_trait]
impl Client for ClientImpl {
    async fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
        Self::parse(
            self.client
                .post(self.endpoint("/api/predict"))
                .json(request)
                .send()
                .await,
        )
        .await
    }

    async fn predict_diet(&self, request: &PredictionRequest) -> Result<Prediction> {
        Self::parse(
            self.client
                .post(self.endpoint("/predict"))
                .json(request)
                .send()
                .await,
        )
        .await
    }

    async fn health(&self) -> Result<Health> {
        Self::parse(self.client.get(self.endpoint("/api/health")).send().await).await
    }

    async fn bmi_categories(&self) -> Result<CategoryTable> {
        Self::parse(self.client.get(self.endpoint("/bmi-categories")).send().await).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ClientImpl::new("http://localhost:5001/".to_owned());
        assert_eq!(
            client.endpoint("/api/predict"),
            "http://localhost:5001/api/predict"
        );
    }
}
