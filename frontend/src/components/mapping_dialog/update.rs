//! Update function for the mapping dialog.
//!
//! Saving re-fetches the terpene, merges the selection into that latest copy
//! with `reconcile` and posts the result. Two saves in flight race; the last
//! one to reach the server wins.

use common::model::{
    AttributeKind, PropertyWithCitation, SmellWithCitation, TasteWithCitation, VocabularyEntry,
};
use common::reconcile::reconcile;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{log_error, show_toast};

use super::messages::Msg;
use super::state::MappingDialog;

pub fn update(component: &mut MappingDialog, ctx: &Context<MappingDialog>, msg: Msg) -> bool {
    match msg {
        Msg::VocabularyLoaded(vocabulary) => {
            component.vocabulary = vocabulary;
            true
        }
        Msg::Toggle(kind, id) => {
            let vocabulary = &component.vocabulary;
            let selection = &mut component.selection;
            match kind {
                AttributeKind::Smell => vocabulary
                    .smell(id)
                    .is_some_and(|entry| selection.toggle(entry.attach())),
                AttributeKind::Taste => vocabulary
                    .taste(id)
                    .is_some_and(|entry| selection.toggle(entry.attach())),
                AttributeKind::Property => vocabulary
                    .property(id)
                    .is_some_and(|entry| selection.toggle(entry.attach())),
            }
        }
        Msg::Remove(kind, id) => match kind {
            AttributeKind::Smell => component.selection.remove::<SmellWithCitation>(id),
            AttributeKind::Taste => component.selection.remove::<TasteWithCitation>(id),
            AttributeKind::Property => component.selection.remove::<PropertyWithCitation>(id),
        },
        Msg::Reset => {
            component.selection.reset();
            true
        }
        Msg::Clear => {
            component.selection.clear();
            true
        }
        Msg::Save => {
            let client = ctx.props().client.clone();
            let terpene_id = ctx.props().terpene.terpene_id;
            let selection = component.selection.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let latest = match client.terpene_object(terpene_id).await {
                    Ok(latest) => latest,
                    Err(e) => return log_error("Error fetching terpene object", e),
                };
                let merged = reconcile(&latest, &selection);
                match client.update_terpene_object(&merged).await {
                    Ok(()) => {
                        show_toast("Changes have been saved");
                        link.send_message(Msg::Saved);
                    }
                    Err(e) => log_error("Error updating terpene object", e),
                }
            });
            false
        }
        Msg::Saved | Msg::Close => {
            ctx.props().on_close.emit(());
            false
        }
    }
}
