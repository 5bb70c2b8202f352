use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::attribute::{PropertyWithCitation, SmellWithCitation, TasteWithCitation};
use super::Id;

/// Entry of the terpene dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terpene {
    #[serde(rename = "TerpeneID")]
    pub id: Id,
    #[serde(rename = "Terpene")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    #[serde(rename = "Synonym")]
    pub synonym: String,
}

/// The aggregate record read from `V2_TerpeneObject` and written back, always
/// whole, to `V2_TerpeneObjectUpdate`.
///
/// The API sends `null` for lists a terpene has nothing in. The three
/// attribute lists decode that as empty; `synonyms` keeps the `None` so the
/// record is written back the way it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerpeneObject {
    #[serde(rename = "TerpeneID")]
    pub terpene_id: Id,
    #[serde(rename = "Terpene")]
    pub terpene: String,
    #[serde(rename = "arySmell", default, deserialize_with = "null_as_empty")]
    pub smells: Vec<SmellWithCitation>,
    #[serde(rename = "aryTaste", default, deserialize_with = "null_as_empty")]
    pub tastes: Vec<TasteWithCitation>,
    #[serde(rename = "arySynonym", default)]
    pub synonyms: Option<Vec<Synonym>>,
    #[serde(rename = "aryProperty", default, deserialize_with = "null_as_empty")]
    pub properties: Vec<PropertyWithCitation>,
    /// Fields this client does not model, sent back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TerpeneObject {
    /// Placeholder shown while no terpene is selected.
    pub fn empty() -> Self {
        Self {
            terpene_id: 0,
            terpene: String::new(),
            smells: Vec::new(),
            tastes: Vec::new(),
            synonyms: None,
            properties: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.terpene_id != 0
    }
}

impl Default for TerpeneObject {
    fn default() -> Self {
        Self::empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_api_payload_with_null_lists() {
        let payload = json!({
            "TerpeneID": 7,
            "Terpene": "Limonene",
            "arySmell": [{ "SmellID": 3, "Smell": "Citrus", "Citation": null }],
            "aryTaste": null,
            "arySynonym": null,
            "aryProperty": [{ "PropertyID": 11, "Property": "Uplifting", "Citation": "Smith 2019" }]
        });

        let terpene: TerpeneObject = serde_json::from_value(payload).unwrap();
        assert_eq!(terpene.terpene_id, 7);
        assert_eq!(terpene.smells[0].name, "Citrus");
        assert_eq!(terpene.smells[0].citation, None);
        assert!(terpene.tastes.is_empty());
        assert_eq!(terpene.synonyms, None);
        assert_eq!(terpene.properties[0].citation.as_deref(), Some("Smith 2019"));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let terpene: TerpeneObject =
            serde_json::from_value(json!({ "TerpeneID": 1, "Terpene": "Pinene" })).unwrap();
        assert!(terpene.smells.is_empty());
        assert!(terpene.properties.is_empty());
        assert!(terpene.is_selected());
    }

    #[test]
    fn serializes_with_api_field_names() {
        let mut terpene = TerpeneObject::empty();
        terpene.terpene_id = 2;
        terpene.terpene = "Myrcene".to_string();
        terpene.synonyms = Some(vec![Synonym { synonym: "beta-Myrcene".to_string() }]);

        let json = serde_json::to_value(&terpene).unwrap();
        assert_eq!(json["TerpeneID"], 2);
        assert_eq!(json["Terpene"], "Myrcene");
        assert_eq!(json["arySmell"], json!([]));
        assert_eq!(json["aryTaste"], json!([]));
        assert_eq!(json["aryProperty"], json!([]));
        assert_eq!(json["arySynonym"][0]["Synonym"], "beta-Myrcene");
    }

    #[test]
    fn unknown_fields_are_written_back() {
        let payload = json!({
            "TerpeneID": 1,
            "Terpene": "Pinene",
            "Description": "kept",
            "arySmell": [{ "SmellID": 1, "Smell": "Pine", "Citation": "x", "Weight": 3 }],
            "aryTaste": [],
            "arySynonym": null,
            "aryProperty": []
        });

        let terpene: TerpeneObject = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(terpene.extra["Description"], "kept");
        assert_eq!(serde_json::to_value(&terpene).unwrap(), payload);
    }

    #[test]
    fn empty_object_is_not_selected() {
        assert!(!TerpeneObject::default().is_selected());
    }
}
