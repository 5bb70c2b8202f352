use serde::{Deserialize, Serialize};

use super::attribute::{Attribute, PropertyWithCitation, SmellWithCitation, TasteWithCitation};
use super::Id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smell {
    #[serde(rename = "SmellID")]
    pub id: Id,
    #[serde(rename = "Smell")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taste {
    #[serde(rename = "TasteID")]
    pub id: Id,
    #[serde(rename = "Taste")]
    pub name: String,
}

/// Full property record as listed by `V1_Property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "PropertyID")]
    pub id: Id,
    #[serde(rename = "Property")]
    pub name: String,
    #[serde(rename = "PropertyDesr", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mapped: Option<String>,
    #[serde(rename = "ClientFacingDesr", default)]
    pub client_facing_description: Option<String>,
    #[serde(rename = "ConsumerFacingDesr", default)]
    pub consumer_facing_description: Option<String>,
}

/// Property reduced to what a selection needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicProperty {
    #[serde(rename = "PropertyID")]
    pub id: Id,
    #[serde(rename = "Property")]
    pub name: String,
}

impl From<&Property> for BasicProperty {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            name: property.name.clone(),
        }
    }
}

/// An entry of one of the selectable vocabularies.
pub trait VocabularyEntry {
    type Attached: Attribute;

    fn id(&self) -> Id;
    fn name(&self) -> &str;

    fn attach(&self) -> Self::Attached {
        Self::Attached::attach(self.id(), self.name())
    }
}

impl VocabularyEntry for Smell {
    type Attached = SmellWithCitation;

    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl VocabularyEntry for Taste {
    type Attached = TasteWithCitation;

    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl VocabularyEntry for Property {
    type Attached = PropertyWithCitation;

    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl VocabularyEntry for BasicProperty {
    type Attached = PropertyWithCitation;

    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The three vocabularies the mapping dialog offers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    pub smells: Vec<Smell>,
    pub tastes: Vec<Taste>,
    pub properties: Vec<Property>,
}

impl Vocabulary {
    pub fn smell(&self, id: Id) -> Option<&Smell> {
        self.smells.iter().find(|s| s.id == id)
    }

    pub fn taste(&self, id: Id) -> Option<&Taste> {
        self.tastes.iter().find(|t| t.id == id)
    }

    pub fn property(&self, id: Id) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}
