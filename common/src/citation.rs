//! Citation editing.
//!
//! Each attribute panel has a [`CitationEditor`]: clicking an item opens its
//! draft, clicking it again (or cancelling) closes it, and saving yields the
//! new text only when it differs from what is stored. A stored `null` and an
//! empty string count as the same citation.

use crate::error::ReconcileError;
use crate::model::{Attribute, AttributeKind, Id, TerpeneObject};

/// One row of a citation list, independent of the attribute type.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationItem {
    pub id: Id,
    pub name: String,
    pub citation: Option<String>,
}

impl CitationItem {
    pub fn from_attribute<A: Attribute>(attribute: &A) -> Self {
        Self {
            id: attribute.id(),
            name: attribute.name().to_string(),
            citation: attribute.citation().map(str::to_string),
        }
    }

    pub fn stored(&self) -> &str {
        self.citation.as_deref().unwrap_or("")
    }

    pub fn has_citation(&self) -> bool {
        !self.stored().is_empty()
    }
}

pub fn items_of<A: Attribute>(attributes: &[A]) -> Vec<CitationItem> {
    attributes.iter().map(CitationItem::from_attribute).collect()
}

/// A citation change ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationSave {
    pub kind: AttributeKind,
    pub id: Id,
    pub name: String,
    pub citation: String,
}

impl CitationSave {
    pub fn confirmation(&self) -> String {
        format!("Citation for {}: {} has been updated", self.kind, self.name)
    }
}

pub fn is_changed(current: Option<&str>, draft: &str) -> bool {
    current.unwrap_or("") != draft
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitationEditor {
    open: Option<Id>,
    draft: String,
}

impl CitationEditor {
    pub fn open_id(&self) -> Option<Id> {
        self.open
    }

    pub fn is_open(&self, id: Id) -> bool {
        self.open == Some(id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Opens `item`'s editor seeded with its stored citation, or closes it if
    /// it was the open one.
    pub fn toggle(&mut self, item: &CitationItem) {
        if self.is_open(item.id) {
            self.cancel();
        } else {
            self.open = Some(item.id);
            self.draft = item.stored().to_string();
        }
    }

    pub fn set_draft(&mut self, text: String) {
        if self.open.is_some() {
            self.draft = text;
        }
    }

    pub fn cancel(&mut self) {
        self.open = None;
        self.draft.clear();
    }

    /// The draft for `item`, if its editor is open and the text changed.
    pub fn pending(&self, item: &CitationItem) -> Option<String> {
        (self.is_open(item.id) && is_changed(item.citation.as_deref(), &self.draft))
            .then(|| self.draft.clone())
    }

    /// Closes the editor when its item is gone from `items`.
    pub fn retain(&mut self, items: &[CitationItem]) {
        if let Some(id) = self.open {
            if !items.iter().any(|item| item.id == id) {
                self.cancel();
            }
        }
    }
}

/// Sets the citation of one attached entry of `terpene`.
pub fn apply_citation(
    terpene: &mut TerpeneObject,
    kind: AttributeKind,
    id: Id,
    citation: String,
) -> Result<(), ReconcileError> {
    match kind {
        AttributeKind::Smell => set_in(&mut terpene.smells, id, citation),
        AttributeKind::Taste => set_in(&mut terpene.tastes, id, citation),
        AttributeKind::Property => set_in(&mut terpene.properties, id, citation),
    }
}

fn set_in<A: Attribute>(items: &mut [A], id: Id, citation: String) -> Result<(), ReconcileError> {
    let item = items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or(ReconcileError::NotAttached { kind: A::KIND, id })?;
    item.set_citation(citation);
    Ok(())
}
