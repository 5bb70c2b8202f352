//! Client configuration: which API host to talk to and the fixed query
//! parameters the list endpoints expect.
//!
//! The backend hands this out at `GET /api/config`; the frontend falls back to
//! [`ClientConfig::default`] when that request fails.

use serde::{Deserialize, Serialize};

use crate::model::Id;

pub const DEFAULT_API_BASE_URL: &str = "https://dev.strainseekr.com/api-server";

/// Path under which the backend serves [`ClientConfig`].
pub const CONFIG_PATH: &str = "/api/config";

/// Endpoint names of the remote API.
pub mod endpoints {
    pub const TERPENES: &str = "V1_Terpene";
    pub const TERPENE_OBJECT: &str = "V2_TerpeneObject";
    pub const TERPENE_OBJECT_UPDATE: &str = "V2_TerpeneObjectUpdate";
    pub const SMELLS: &str = "V1_Smell";
    pub const TASTES: &str = "V1_Taste";
    pub const PROPERTIES: &str = "V1_Property";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    #[serde(default)]
    pub dispensary_id: Id,
    /// Comma separated strain type filter for the smell and taste lists.
    #[serde(default)]
    pub strain_type_ids: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("TERPENE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            dispensary_id: 0,
            strain_type_ids: String::new(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), endpoint)
    }

    pub fn terpenes_url(&self) -> String {
        format!("{}?DispensaryID={}", self.url(endpoints::TERPENES), self.dispensary_id)
    }

    pub fn terpene_object_url(&self, terpene_id: Id) -> String {
        format!("{}?inTerpeneID={}", self.url(endpoints::TERPENE_OBJECT), terpene_id)
    }

    pub fn smells_url(&self) -> String {
        self.strain_filtered(endpoints::SMELLS)
    }

    pub fn tastes_url(&self) -> String {
        self.strain_filtered(endpoints::TASTES)
    }

    pub fn properties_url(&self) -> String {
        self.url(endpoints::PROPERTIES)
    }

    pub fn update_url(&self) -> String {
        self.url(endpoints::TERPENE_OBJECT_UPDATE)
    }

    fn strain_filtered(&self, endpoint: &str) -> String {
        format!(
            "{}?DispensaryID={}&StrainTypeIDs={}",
            self.url(endpoint),
            self.dispensary_id,
            self.strain_type_ids
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_api_urls() {
        let config = ClientConfig::new("https://api.example.test/api-server/");

        assert_eq!(
            config.terpenes_url(),
            "https://api.example.test/api-server/V1_Terpene?DispensaryID=0"
        );
        assert_eq!(
            config.terpene_object_url(42),
            "https://api.example.test/api-server/V2_TerpeneObject?inTerpeneID=42"
        );
        assert_eq!(
            config.smells_url(),
            "https://api.example.test/api-server/V1_Smell?DispensaryID=0&StrainTypeIDs="
        );
        assert_eq!(
            config.properties_url(),
            "https://api.example.test/api-server/V1_Property"
        );
        assert_eq!(
            config.update_url(),
            "https://api.example.test/api-server/V2_TerpeneObjectUpdate"
        );
    }

    #[test]
    fn strain_filter_is_passed_through() {
        let mut config = ClientConfig::new("http://localhost:9000");
        config.dispensary_id = 12;
        config.strain_type_ids = "1,3".to_string();

        assert_eq!(
            config.tastes_url(),
            "http://localhost:9000/V1_Taste?DispensaryID=12&StrainTypeIDs=1,3"
        );
    }

    #[test]
    fn missing_optional_fields_decode_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url":"http://h"}"#).unwrap();
        assert_eq!(config.dispensary_id, 0);
        assert_eq!(config.strain_type_ids, "");
    }
}
