//! Local selection state of the mapping dialog.
//!
//! A [`Selection`] starts from the attachments of the terpene being edited and
//! records what the user picks and drops before saving. The dialog mode decides
//! which edits are allowed:
//!
//! - `Add` can only attach; entries already on the terpene are locked.
//! - `Remove` can only detach (and re-attach what it detached).
//! - `Edit` can do both.
//!
//! Each list keeps selection order and never holds the same ID twice.

use std::collections::HashSet;

use crate::model::{
    Attribute, Id, PropertyWithCitation, SmellWithCitation, TasteWithCitation, TerpeneObject,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Add,
    Remove,
    Edit,
}

impl SelectionMode {
    pub const ALL: [SelectionMode; 3] = [SelectionMode::Add, SelectionMode::Remove, SelectionMode::Edit];

    /// Label of the page button that opens the dialog in this mode.
    pub fn title(self) -> &'static str {
        match self {
            SelectionMode::Add => "Add Details",
            SelectionMode::Remove => "Remove Details",
            SelectionMode::Edit => "Edit Details",
        }
    }

    /// Verb used in the section headings of the dialog.
    pub fn verb(self) -> &'static str {
        match self {
            SelectionMode::Add => "Select",
            SelectionMode::Remove => "Delete",
            SelectionMode::Edit => "Selected",
        }
    }

    pub fn can_add(self) -> bool {
        self != SelectionMode::Remove
    }

    pub fn can_remove_existing(self) -> bool {
        self != SelectionMode::Add
    }
}

/// One ordered, ID-unique list together with the snapshot it started from.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeList<A> {
    items: Vec<A>,
    initial: Vec<A>,
}

impl<A: Attribute> AttributeList<A> {
    pub fn new(initial: &[A]) -> Self {
        let mut seen = HashSet::new();
        let initial: Vec<A> = initial
            .iter()
            .filter(|a| seen.insert(a.id()))
            .cloned()
            .collect();
        Self {
            items: initial.clone(),
            initial,
        }
    }

    pub fn items(&self) -> &[A] {
        &self.items
    }

    pub fn contains(&self, id: Id) -> bool {
        self.items.iter().any(|a| a.id() == id)
    }

    pub fn is_initial(&self, id: Id) -> bool {
        self.initial.iter().any(|a| a.id() == id)
    }

    pub fn is_dirty(&self) -> bool {
        let current: Vec<Id> = self.items.iter().map(Attribute::id).collect();
        let initial: Vec<Id> = self.initial.iter().map(Attribute::id).collect();
        current != initial
    }

    fn push(&mut self, item: A) -> bool {
        if self.contains(item.id()) {
            return false;
        }
        self.items.push(item);
        true
    }

    fn remove(&mut self, id: Id) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id() != id);
        self.items.len() != before
    }

    fn reset(&mut self) {
        self.items = self.initial.clone();
    }

    fn clear_additions(&mut self) {
        let initial: HashSet<Id> = self.initial.iter().map(Attribute::id).collect();
        self.items.retain(|a| initial.contains(&a.id()));
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Routes a generic call on [`Selection`] to the list holding that attribute type.
pub trait Selectable: Attribute {
    fn list(selection: &Selection) -> &AttributeList<Self>;
    fn list_mut(selection: &mut Selection) -> &mut AttributeList<Self>;
}

impl Selectable for SmellWithCitation {
    fn list(selection: &Selection) -> &AttributeList<Self> {
        &selection.smells
    }

    fn list_mut(selection: &mut Selection) -> &mut AttributeList<Self> {
        &mut selection.smells
    }
}

impl Selectable for TasteWithCitation {
    fn list(selection: &Selection) -> &AttributeList<Self> {
        &selection.tastes
    }

    fn list_mut(selection: &mut Selection) -> &mut AttributeList<Self> {
        &mut selection.tastes
    }
}

impl Selectable for PropertyWithCitation {
    fn list(selection: &Selection) -> &AttributeList<Self> {
        &selection.properties
    }

    fn list_mut(selection: &mut Selection) -> &mut AttributeList<Self> {
        &mut selection.properties
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    mode: SelectionMode,
    terpene_id: Id,
    smells: AttributeList<SmellWithCitation>,
    tastes: AttributeList<TasteWithCitation>,
    properties: AttributeList<PropertyWithCitation>,
}

impl Selection {
    pub fn new(mode: SelectionMode, terpene: &TerpeneObject) -> Self {
        Self {
            mode,
            terpene_id: terpene.terpene_id,
            smells: AttributeList::new(&terpene.smells),
            tastes: AttributeList::new(&terpene.tastes),
            properties: AttributeList::new(&terpene.properties),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether this selection was seeded for `terpene_id` in `mode`. A reload
    /// of the same terpene does not make it stale.
    pub fn is_for(&self, mode: SelectionMode, terpene_id: Id) -> bool {
        self.mode == mode && self.terpene_id == terpene_id
    }

    pub fn items<A: Selectable>(&self) -> &[A] {
        A::list(self).items()
    }

    pub fn contains<A: Selectable>(&self, id: Id) -> bool {
        A::list(self).contains(id)
    }

    /// Whether the entry may not be detached in the current mode.
    pub fn is_locked<A: Selectable>(&self, id: Id) -> bool {
        !self.mode.can_remove_existing() && A::list(self).is_initial(id)
    }

    /// Whether clicking the entry's option would change the selection.
    pub fn can_toggle<A: Selectable>(&self, id: Id) -> bool {
        if self.contains::<A>(id) {
            !self.is_locked::<A>(id)
        } else {
            self.mode.can_add() || A::list(self).is_initial(id)
        }
    }

    /// Attaches `item` if the mode allows it. Returns whether anything changed.
    pub fn add<A: Selectable>(&mut self, item: A) -> bool {
        let can_add = self.mode.can_add();
        let list = A::list_mut(self);
        if !can_add && !list.is_initial(item.id()) {
            return false;
        }
        list.push(item)
    }

    /// Detaches `id` unless it is locked. Returns whether anything changed.
    pub fn remove<A: Selectable>(&mut self, id: Id) -> bool {
        if self.is_locked::<A>(id) {
            return false;
        }
        A::list_mut(self).remove(id)
    }

    /// Flips membership of `item`, the way a click on a multi-select option does.
    pub fn toggle<A: Selectable>(&mut self, item: A) -> bool {
        if self.contains::<A>(item.id()) {
            self.remove::<A>(item.id())
        } else {
            self.add(item)
        }
    }

    pub fn reset(&mut self) {
        self.smells.reset();
        self.tastes.reset();
        self.properties.reset();
    }

    /// Drops the pending additions in `Add` mode, everything otherwise.
    pub fn clear(&mut self) {
        if self.mode.can_remove_existing() {
            self.smells.clear();
            self.tastes.clear();
            self.properties.clear();
        } else {
            self.smells.clear_additions();
            self.tastes.clear_additions();
            self.properties.clear_additions();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.smells.is_dirty() || self.tastes.is_dirty() || self.properties.is_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smell(id: Id, name: &str, citation: Option<&str>) -> SmellWithCitation {
        SmellWithCitation {
            id,
            name: name.to_string(),
            citation: citation.map(str::to_string),
            extra: Default::default(),
        }
    }

    fn terpene() -> TerpeneObject {
        let mut terpene = TerpeneObject::empty();
        terpene.terpene_id = 1;
        terpene.terpene = "Linalool".to_string();
        terpene.smells = vec![smell(1, "Floral", Some("Ref A")), smell(2, "Lavender", None)];
        terpene.tastes = vec![TasteWithCitation::attach(10, "Spicy")];
        terpene
    }

    #[test]
    fn starts_from_existing_attachments() {
        let selection = Selection::new(SelectionMode::Edit, &terpene());
        assert_eq!(selection.items::<SmellWithCitation>().len(), 2);
        assert!(selection.contains::<TasteWithCitation>(10));
        assert!(selection.items::<PropertyWithCitation>().is_empty());
        assert!(!selection.is_dirty());
    }

    #[test]
    fn initial_duplicates_collapse() {
        let mut source = terpene();
        source.smells.push(smell(1, "Floral", None));
        let selection = Selection::new(SelectionMode::Edit, &source);
        assert_eq!(selection.items::<SmellWithCitation>().len(), 2);
    }

    #[test]
    fn add_mode_locks_existing_entries() {
        let mut selection = Selection::new(SelectionMode::Add, &terpene());

        assert!(selection.is_locked::<SmellWithCitation>(1));
        assert!(!selection.remove::<SmellWithCitation>(1));
        assert!(!selection.toggle(smell(1, "Floral", None)));

        assert!(selection.toggle(smell(3, "Sweet", Some(""))));
        assert!(selection.contains::<SmellWithCitation>(3));
        assert!(selection.toggle(smell(3, "Sweet", Some(""))));
        assert!(!selection.contains::<SmellWithCitation>(3));
    }

    #[test]
    fn remove_mode_cannot_attach_new_entries() {
        let mut selection = Selection::new(SelectionMode::Remove, &terpene());

        assert!(!selection.add(smell(3, "Sweet", None)));
        assert!(selection.remove::<SmellWithCitation>(2));
        assert!(selection.is_dirty());
        assert!(selection.add(smell(2, "Lavender", None)));
    }

    #[test]
    fn can_toggle_mirrors_mode_rules() {
        let adding = Selection::new(SelectionMode::Add, &terpene());
        assert!(!adding.can_toggle::<SmellWithCitation>(1));
        assert!(adding.can_toggle::<SmellWithCitation>(3));

        let mut removing = Selection::new(SelectionMode::Remove, &terpene());
        assert!(removing.can_toggle::<SmellWithCitation>(1));
        assert!(!removing.can_toggle::<SmellWithCitation>(3));
        removing.remove::<SmellWithCitation>(1);
        assert!(removing.can_toggle::<SmellWithCitation>(1));
    }

    #[test]
    fn add_is_idempotent_per_id() {
        let mut selection = Selection::new(SelectionMode::Edit, &terpene());
        assert!(!selection.add(smell(2, "Lavender", None)));
        assert_eq!(selection.items::<SmellWithCitation>().len(), 2);
    }

    #[test]
    fn reset_restores_snapshot() {
        let mut selection = Selection::new(SelectionMode::Edit, &terpene());
        selection.remove::<SmellWithCitation>(1);
        selection.add(PropertyWithCitation::attach(7, "Sedating"));
        assert!(selection.is_dirty());

        selection.reset();
        assert!(!selection.is_dirty());
        assert_eq!(selection.items::<SmellWithCitation>()[0].id, 1);
    }

    #[test]
    fn clear_depends_on_mode() {
        let mut adding = Selection::new(SelectionMode::Add, &terpene());
        adding.add(smell(4, "Woody", None));
        adding.clear();
        let ids: Vec<Id> = adding.items::<SmellWithCitation>().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let mut editing = Selection::new(SelectionMode::Edit, &terpene());
        editing.clear();
        assert!(editing.items::<SmellWithCitation>().is_empty());
        assert!(editing.items::<TasteWithCitation>().is_empty());
    }

    #[test]
    fn reloaded_terpene_keeps_pending_picks() {
        let mut selection = Selection::new(SelectionMode::Edit, &terpene());
        selection.add(smell(5, "Herbal", None));

        let mut reloaded = terpene();
        reloaded.smells[0].citation = Some("New ref".to_string());
        assert!(selection.is_for(SelectionMode::Edit, reloaded.terpene_id));
        assert!(selection.contains::<SmellWithCitation>(5));

        assert!(!selection.is_for(SelectionMode::Add, 1));
        assert!(!selection.is_for(SelectionMode::Edit, 2));
    }

    #[test]
    fn mode_labels() {
        let titles: Vec<_> = SelectionMode::ALL.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Add Details", "Remove Details", "Edit Details"]);
        assert_eq!(SelectionMode::Remove.verb(), "Delete");
    }
}
