use common::citation::{items_of, CitationItem};
use common::model::{AttributeKind, Id, Terpene, TerpeneObject};
use common::selection::SelectionMode;

use crate::api::ApiClient;

pub struct TerpeneMappingPage {
    pub client: ApiClient,

    /// Dropdown entries.
    pub terpenes: Vec<Terpene>,

    /// Aggregate of the selected terpene, or `TerpeneObject::empty()`.
    pub selected: TerpeneObject,

    /// Terpene picked in the dropdown. Responses for any other id are stale.
    pub requested: Option<Id>,

    /// Mode of the open mapping dialog, if any.
    pub dialog: Option<SelectionMode>,

    /// Whether the terpene list has been requested for the current client.
    pub loaded: bool,
}

impl TerpeneMappingPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            terpenes: Vec::new(),
            selected: TerpeneObject::empty(),
            requested: None,
            dialog: None,
            loaded: false,
        }
    }

    /// Records a dropdown pick and returns the terpene to fetch, if any.
    /// Unknown ids and the placeholder clear the page.
    pub fn select(&mut self, terpene_id: Option<Id>) -> Option<Id> {
        self.requested = terpene_id.filter(|id| self.terpenes.iter().any(|t| t.id == *id));
        if self.requested.is_none() {
            self.selected = TerpeneObject::empty();
        }
        self.requested
    }

    /// Shows `terpene` unless the user has picked something else meanwhile.
    pub fn accept_loaded(&mut self, terpene: TerpeneObject) -> bool {
        if self.requested != Some(terpene.terpene_id) {
            return false;
        }
        self.selected = terpene;
        true
    }

    pub fn citation_items(&self, kind: AttributeKind) -> Vec<CitationItem> {
        match kind {
            AttributeKind::Smell => items_of(&self.selected.smells),
            AttributeKind::Taste => items_of(&self.selected.tastes),
            AttributeKind::Property => items_of(&self.selected.properties),
        }
    }
}
