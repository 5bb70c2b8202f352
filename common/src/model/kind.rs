use std::fmt;

use serde::{Deserialize, Serialize};

/// The three attribute vocabularies that can be attached to a terpene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Smell,
    Taste,
    Property,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Smell,
        AttributeKind::Taste,
        AttributeKind::Property,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Smell => "Smell",
            AttributeKind::Taste => "Taste",
            AttributeKind::Property => "Property",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            AttributeKind::Smell => "Smells",
            AttributeKind::Taste => "Tastes",
            AttributeKind::Property => "Properties",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_labels_match_panel_titles() {
        let plurals: Vec<_> = AttributeKind::ALL.iter().map(|k| k.plural()).collect();
        assert_eq!(plurals, vec!["Smells", "Tastes", "Properties"]);
        assert_eq!(AttributeKind::Property.label(), "Property");
    }
}
