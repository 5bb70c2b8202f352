//! Attribute panels of the mapping page.
//!
//! `SelectedItems` is the titled panel for one attribute kind and hosts a
//! `CitationList`, which owns the inline citation editor of that panel.

mod citation_list;

use common::citation::{CitationItem, CitationSave};
use common::model::AttributeKind;
use yew::prelude::*;

pub use citation_list::CitationList;

#[derive(Properties, PartialEq, Clone)]
pub struct CitationPanelProps {
    pub kind: AttributeKind,
    pub items: Vec<CitationItem>,
    /// Fired with a citation that differs from the stored one.
    pub on_save: Callback<CitationSave>,
}

pub struct SelectedItems;

impl Component for SelectedItems {
    type Message = ();
    type Properties = CitationPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SelectedItems
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <section class="panel">
                <h2 class="panel-title">{ format!("Selected {}:", props.kind.plural()) }</h2>
                <CitationList
                    kind={props.kind}
                    items={props.items.clone()}
                    on_save={props.on_save.clone()}
                />
            </section>
        }
    }
}
