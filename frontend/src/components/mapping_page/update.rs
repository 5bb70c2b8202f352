//! Update function for the terpene mapping page.
//!
//! Key behaviors
//! - Dropdown selection loads the terpene aggregate; the placeholder clears it.
//!   A response for a terpene that is no longer picked is dropped.
//! - Closing the mapping dialog reloads the aggregate, saved or not.
//! - Citation saves re-fetch the aggregate, change one citation and write the
//!   whole object back.

use common::citation::apply_citation;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{log_error, show_toast};

use super::fetch_terpene;
use super::messages::Msg;
use super::state::TerpeneMappingPage;

pub fn update(
    component: &mut TerpeneMappingPage,
    ctx: &Context<TerpeneMappingPage>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::TerpenesLoaded(terpenes) => {
            component.terpenes = terpenes;
            true
        }
        Msg::SelectTerpene(terpene_id) => {
            if let Some(id) = component.select(terpene_id) {
                fetch_terpene(ctx.link().clone(), component.client.clone(), id);
            }
            true
        }
        Msg::TerpeneLoaded(terpene) => component.accept_loaded(terpene),
        Msg::OpenDialog(mode) => {
            if !component.selected.is_selected() {
                return false;
            }
            component.dialog = Some(mode);
            true
        }
        Msg::DialogClosed => {
            component.dialog = None;
            reload_selected(component, ctx);
            true
        }
        Msg::SaveCitation(save) => {
            let terpene_id = component.selected.terpene_id;
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let mut latest = match client.terpene_object(terpene_id).await {
                    Ok(latest) => latest,
                    Err(e) => return log_error("Error fetching terpene object", e),
                };
                if let Err(e) = apply_citation(&mut latest, save.kind, save.id, save.citation.clone()) {
                    return log_error("Citation not saved", e);
                }
                match client.update_terpene_object(&latest).await {
                    Ok(()) => {
                        show_toast(&save.confirmation());
                        link.send_message(Msg::CitationSaved);
                    }
                    Err(e) => log_error("Error updating citation", e),
                }
            });
            false
        }
        Msg::CitationSaved => {
            reload_selected(component, ctx);
            false
        }
    }
}

fn reload_selected(component: &TerpeneMappingPage, ctx: &Context<TerpeneMappingPage>) {
    if component.selected.is_selected() {
        fetch_terpene(
            ctx.link().clone(),
            component.client.clone(),
            component.selected.terpene_id,
        );
    }
}
