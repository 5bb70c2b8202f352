//! View rendering for the terpene mapping page: dropdown, dialog buttons, the
//! three attribute panels and, when open, the mapping dialog.

use common::model::AttributeKind;
use common::selection::SelectionMode;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::citations::SelectedItems;
use crate::components::mapping_dialog::MappingDialog;
use crate::components::terpene_select::TerpeneSelect;
use crate::panel_grid::PanelGrid;

use super::messages::Msg;
use super::state::TerpeneMappingPage;

pub fn view(component: &TerpeneMappingPage, ctx: &Context<TerpeneMappingPage>) -> Html {
    let link = ctx.link();
    let selected = component.selected.is_selected();

    html! {
        <main class="page">
            <h1 class="page-title">{ "Terpene Mapping" }</h1>
            <div class="terpene-picker">
                <TerpeneSelect
                    terpenes={component.terpenes.clone()}
                    selected={selected.then_some(component.selected.terpene_id)}
                    on_change={link.callback(Msg::SelectTerpene)}
                />
                { if selected { build_actions(link) } else { html! {} } }
            </div>
            { if selected { build_panels(component, link) } else { html! {} } }
            { build_dialog(component, link) }
        </main>
    }
}

fn build_actions(link: &Scope<TerpeneMappingPage>) -> Html {
    html! {
        <div class="actions">
            {
                for SelectionMode::ALL.into_iter().map(|mode| {
                    let tone = match mode {
                        SelectionMode::Add => "primary",
                        SelectionMode::Remove => "danger",
                        SelectionMode::Edit => "secondary",
                    };
                    html! {
                        <button
                            class={classes!("btn", "outlined", tone)}
                            onclick={link.callback(move |_| Msg::OpenDialog(mode))}
                        >
                            { mode.title() }
                        </button>
                    }
                })
            }
        </div>
    }
}

fn build_panels(component: &TerpeneMappingPage, link: &Scope<TerpeneMappingPage>) -> Html {
    html! {
        <PanelGrid columns={AttributeKind::ALL.len()}>
            {
                for AttributeKind::ALL.into_iter().map(|kind| html! {
                    <SelectedItems
                        {kind}
                        items={component.citation_items(kind)}
                        on_save={link.callback(Msg::SaveCitation)}
                    />
                })
            }
        </PanelGrid>
    }
}

fn build_dialog(component: &TerpeneMappingPage, link: &Scope<TerpeneMappingPage>) -> Html {
    match component.dialog {
        Some(mode) => html! {
            <MappingDialog
                client={component.client.clone()}
                terpene={component.selected.clone()}
                {mode}
                on_close={link.callback(|_| Msg::DialogClosed)}
            />
        },
        None => html! {},
    }
}
