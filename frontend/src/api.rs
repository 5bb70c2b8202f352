//! Client for the remote terpene API.
//!
//! Every call returns `Result<_, ApiError>`; callers log failures to the
//! browser console and keep going. There is no retry and no cancellation.

use common::config::{endpoints, ClientConfig, CONFIG_PATH};
use common::error::ApiError;
use common::model::{Id, Property, Smell, Taste, Terpene, TerpeneObject, Vocabulary};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn terpenes(&self) -> Result<Vec<Terpene>, ApiError> {
        get_json(endpoints::TERPENES, &self.config.terpenes_url()).await
    }

    pub async fn terpene_object(&self, terpene_id: Id) -> Result<TerpeneObject, ApiError> {
        get_json(
            endpoints::TERPENE_OBJECT,
            &self.config.terpene_object_url(terpene_id),
        )
        .await
    }

    pub async fn smells(&self) -> Result<Vec<Smell>, ApiError> {
        get_json(endpoints::SMELLS, &self.config.smells_url()).await
    }

    pub async fn tastes(&self) -> Result<Vec<Taste>, ApiError> {
        get_json(endpoints::TASTES, &self.config.tastes_url()).await
    }

    pub async fn properties(&self) -> Result<Vec<Property>, ApiError> {
        get_json(endpoints::PROPERTIES, &self.config.properties_url()).await
    }

    /// Fetches the three vocabularies one after the other; the first failure
    /// stops the rest.
    pub async fn vocabulary(&self) -> Result<Vocabulary, ApiError> {
        let tastes = self.tastes().await?;
        let smells = self.smells().await?;
        let properties = self.properties().await?;
        Ok(Vocabulary {
            smells,
            tastes,
            properties,
        })
    }

    /// Replaces the stored aggregate with `terpene`.
    pub async fn update_terpene_object(&self, terpene: &TerpeneObject) -> Result<(), ApiError> {
        let endpoint = endpoints::TERPENE_OBJECT_UPDATE;
        let request = Request::post(&self.config.update_url())
            .json(terpene)
            .map_err(|e| ApiError::Encode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;
        let response = request.send().await.map_err(|e| network_error(endpoint, e))?;
        check_status(endpoint, &response)
    }
}

/// Asks the serving backend for the API configuration.
pub async fn load_client_config() -> Result<ClientConfig, ApiError> {
    get_json(CONFIG_PATH, CONFIG_PATH).await
}

async fn get_json<T: DeserializeOwned>(endpoint: &str, url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| network_error(endpoint, e))?;
    check_status(endpoint, &response)?;
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

fn check_status(endpoint: &str, response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: response.status(),
        })
    }
}

fn network_error(endpoint: &str, error: gloo_net::Error) -> ApiError {
    ApiError::Network {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}
