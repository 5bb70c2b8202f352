//! Merging the dialog selection into the server's latest copy of a terpene.
//!
//! The caller re-fetches the aggregate right before saving and passes it here
//! as `latest`. Entries the server already has keep their stored record (and
//! citation); new ones are attached with an empty citation. The merged object
//! replaces the server copy wholesale, so whoever saves last wins.

use std::collections::HashSet;

use crate::model::{
    Attribute, PropertyWithCitation, SmellWithCitation, TasteWithCitation, TerpeneObject,
};
use crate::selection::Selection;

/// Merges one attribute list. Output order is selection order; repeated IDs
/// keep their first occurrence.
pub fn merge_attributes<A: Attribute>(selected: &[A], latest: &[A]) -> Vec<A> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|item| seen.insert(item.id()))
        .map(|item| {
            latest
                .iter()
                .find(|existing| existing.id() == item.id())
                .cloned()
                .unwrap_or_else(|| A::attach(item.id(), item.name()))
        })
        .collect()
}

/// Builds the full object to send to the update endpoint.
pub fn reconcile(latest: &TerpeneObject, selection: &Selection) -> TerpeneObject {
    TerpeneObject {
        terpene_id: latest.terpene_id,
        terpene: latest.terpene.clone(),
        smells: merge_attributes(selection.items::<SmellWithCitation>(), &latest.smells),
        tastes: merge_attributes(selection.items::<TasteWithCitation>(), &latest.tastes),
        synonyms: latest.synonyms.clone(),
        properties: merge_attributes(
            selection.items::<PropertyWithCitation>(),
            &latest.properties,
        ),
        extra: latest.extra.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Id, Synonym};
    use crate::selection::SelectionMode;

    fn smell(id: Id, name: &str, citation: Option<&str>) -> SmellWithCitation {
        SmellWithCitation {
            id,
            name: name.to_string(),
            citation: citation.map(str::to_string),
            extra: Default::default(),
        }
    }

    fn persisted() -> TerpeneObject {
        let mut terpene = TerpeneObject::empty();
        terpene.terpene_id = 5;
        terpene.terpene = "Caryophyllene".to_string();
        terpene.smells = vec![smell(1, "Pepper", None), smell(2, "Wood", None)];
        terpene.properties = vec![PropertyWithCitation::attach(30, "Anti-inflammatory")];
        terpene
    }

    #[test]
    fn keeps_server_citations_for_existing_entries() {
        let mut selection = Selection::new(SelectionMode::Edit, &persisted());
        selection.add(smell(3, "Clove", None));

        // Someone cited "Pepper" while the dialog was open.
        let mut latest = persisted();
        latest.smells[0].citation = Some("Gertsch 2008".to_string());

        let merged = reconcile(&latest, &selection);
        assert_eq!(
            merged.smells,
            vec![
                smell(1, "Pepper", Some("Gertsch 2008")),
                smell(2, "Wood", None),
                smell(3, "Clove", Some("")),
            ]
        );
    }

    #[test]
    fn new_entries_get_empty_citation_even_if_selection_carried_one() {
        let merged = merge_attributes(&[smell(8, "Mint", Some("draft"))], &[]);
        assert_eq!(merged, vec![smell(8, "Mint", Some(""))]);
    }

    #[test]
    fn deselected_entries_are_dropped() {
        let mut selection = Selection::new(SelectionMode::Remove, &persisted());
        selection.remove::<SmellWithCitation>(1);
        selection.remove::<PropertyWithCitation>(30);

        let merged = reconcile(&persisted(), &selection);
        assert_eq!(merged.smells, vec![smell(2, "Wood", None)]);
        assert!(merged.properties.is_empty());
    }

    #[test]
    fn follows_selection_order_and_dedupes() {
        let selected = vec![smell(2, "Wood", None), smell(1, "Pepper", None), smell(2, "Wood", None)];
        let merged = merge_attributes(&selected, &persisted().smells);
        let ids: Vec<Id> = merged.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn scalar_fields_and_synonyms_come_from_latest() {
        let selection = Selection::new(SelectionMode::Edit, &persisted());
        let mut latest = persisted();
        latest.terpene = "beta-Caryophyllene".to_string();
        latest.synonyms = Some(vec![Synonym { synonym: "BCP".to_string() }]);

        let merged = reconcile(&latest, &selection);
        assert_eq!(merged.terpene_id, 5);
        assert_eq!(merged.terpene, "beta-Caryophyllene");
        assert_eq!(merged.synonyms, latest.synonyms);
    }

    #[test]
    fn unmodelled_server_fields_reach_the_update() {
        let latest: TerpeneObject = serde_json::from_value(serde_json::json!({
            "TerpeneID": 1,
            "Terpene": "Pinene",
            "Description": "kept",
            "arySmell": [{ "SmellID": 1, "Smell": "Pine", "Citation": "x", "Weight": 3 }]
        }))
        .unwrap();
        let selection = Selection::new(SelectionMode::Edit, &latest);

        let body = serde_json::to_value(reconcile(&latest, &selection)).unwrap();
        assert_eq!(body["Description"], "kept");
        assert_eq!(body["arySmell"][0]["Weight"], 3);
        assert_eq!(body["arySmell"][0]["Citation"], "x");
    }

    #[test]
    fn entries_deleted_server_side_come_back_uncited() {
        let selection = Selection::new(SelectionMode::Edit, &persisted());
        let mut latest = persisted();
        latest.smells.retain(|s| s.id != 2);

        let merged = reconcile(&latest, &selection);
        assert_eq!(merged.smells[1], smell(2, "Wood", Some("")));
    }
}
