//! Vocabulary entries as they appear attached to a terpene, each with its
//! optional citation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::AttributeKind;
use super::Id;

/// Common view over the three `*WithCitation` records so reconciliation and
/// citation editing are written once.
pub trait Attribute: Clone + PartialEq {
    const KIND: AttributeKind;

    fn id(&self) -> Id;
    fn name(&self) -> &str;
    fn citation(&self) -> Option<&str>;
    fn set_citation(&mut self, citation: String);

    /// A freshly attached entry. Its citation is the empty string, not `null`.
    fn attach(id: Id, name: &str) -> Self;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmellWithCitation {
    #[serde(rename = "SmellID")]
    pub id: Id,
    #[serde(rename = "Smell")]
    pub name: String,
    #[serde(rename = "Citation", default)]
    pub citation: Option<String>,
    /// Fields this client does not model, sent back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasteWithCitation {
    #[serde(rename = "TasteID")]
    pub id: Id,
    #[serde(rename = "Taste")]
    pub name: String,
    #[serde(rename = "Citation", default)]
    pub citation: Option<String>,
    /// Fields this client does not model, sent back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyWithCitation {
    #[serde(rename = "PropertyID")]
    pub id: Id,
    #[serde(rename = "Property")]
    pub name: String,
    #[serde(rename = "Citation", default)]
    pub citation: Option<String>,
    /// Fields this client does not model, sent back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

macro_rules! impl_attribute {
    ($ty:ty, $kind:expr) => {
        impl Attribute for $ty {
            const KIND: AttributeKind = $kind;

            fn id(&self) -> Id {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn citation(&self) -> Option<&str> {
                self.citation.as_deref()
            }

            fn set_citation(&mut self, citation: String) {
                self.citation = Some(citation);
            }

            fn attach(id: Id, name: &str) -> Self {
                Self {
                    id,
                    name: name.to_string(),
                    citation: Some(String::new()),
                    extra: Map::new(),
                }
            }
        }
    };
}

impl_attribute!(SmellWithCitation, AttributeKind::Smell);
impl_attribute!(TasteWithCitation, AttributeKind::Taste);
impl_attribute!(PropertyWithCitation, AttributeKind::Property);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attach_sets_empty_citation() {
        let taste = TasteWithCitation::attach(4, "Sweet");
        assert_eq!(taste.citation(), Some(""));
        assert!(taste.extra.is_empty());
    }

    #[test]
    fn set_citation_replaces_null() {
        let mut smell = SmellWithCitation::attach(1, "Pine");
        smell.citation = None;
        smell.set_citation("Doe et al.".into());
        assert_eq!(smell.citation(), Some("Doe et al."));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let payload = json!({ "SmellID": 1, "Smell": "Pine", "Citation": null, "Weight": 3 });
        let smell: SmellWithCitation = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(smell.extra["Weight"], 3);
        assert_eq!(serde_json::to_value(&smell).unwrap(), payload);
    }
}
