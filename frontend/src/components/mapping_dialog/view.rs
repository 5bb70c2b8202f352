//! View rendering for the mapping dialog: one section per attribute kind with
//! the vocabulary options and the current selection as chips.

use common::model::{Attribute, AttributeKind, VocabularyEntry};
use common::selection::{Selectable, Selection, SelectionMode};
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::ModalSheet;

use super::messages::Msg;
use super::state::MappingDialog;

pub fn view(component: &MappingDialog, ctx: &Context<MappingDialog>) -> Html {
    let link = ctx.link();
    let mode = ctx.props().mode;
    let vocabulary = &component.vocabulary;
    let selection = &component.selection;

    html! {
        <ModalSheet title={mode.title()} on_close={link.callback(|_| Msg::Close)}>
            <div class="dialog-body">
                { section(selection, AttributeKind::Smell, &vocabulary.smells, link) }
                { section(selection, AttributeKind::Taste, &vocabulary.tastes, link) }
                { section(selection, AttributeKind::Property, &vocabulary.properties, link) }
            </div>
            { build_footer(mode, selection, link) }
        </ModalSheet>
    }
}

fn section<V>(
    selection: &Selection,
    kind: AttributeKind,
    entries: &[V],
    link: &Scope<MappingDialog>,
) -> Html
where
    V: VocabularyEntry,
    V::Attached: Selectable,
{
    let heading = format!("{} {}:", selection.mode().verb(), kind.plural());

    let options = if entries.is_empty() {
        html! { <p class="loading">{ "Loading..." }</p> }
    } else {
        html! {
            <ul class="option-list" role="listbox" aria-multiselectable="true">
                {
                    for entries.iter().map(|entry| {
                        let id = entry.id();
                        let selected = selection.contains::<V::Attached>(id);
                        let enabled = selection.can_toggle::<V::Attached>(id);
                        html! {
                            <li
                                class={classes!(
                                    "option",
                                    selected.then_some("selected"),
                                    (!enabled).then_some("disabled"),
                                )}
                                role="option"
                                aria-selected={selected.to_string()}
                                onclick={enabled.then(|| link.callback(move |_| Msg::Toggle(kind, id)))}
                            >
                                { entry.name().to_string() }
                            </li>
                        }
                    })
                }
            </ul>
        }
    };

    html! {
        <section class="dialog-section">
            <h3>{ heading }</h3>
            { options }
            <div class="chips">
                {
                    for selection.items::<V::Attached>().iter().map(|item| {
                        let id = item.id();
                        let locked = selection.is_locked::<V::Attached>(id);
                        html! {
                            <span class={classes!("chip", locked.then_some("locked"))}>
                                { item.name().to_string() }
                                {
                                    if locked {
                                        html! {}
                                    } else {
                                        html! {
                                            <button
                                                class="chip-delete"
                                                title="Remove"
                                                onclick={link.callback(move |_| Msg::Remove(kind, id))}
                                            >
                                                { "✕" }
                                            </button>
                                        }
                                    }
                                }
                            </span>
                        }
                    })
                }
            </div>
        </section>
    }
}

fn build_footer(mode: SelectionMode, selection: &Selection, link: &Scope<MappingDialog>) -> Html {
    let dirty = selection.is_dirty();
    // Add mode can only drop what it added; the other modes start over.
    let secondary = match mode {
        SelectionMode::Add => html! {
            <button class="btn text secondary" onclick={link.callback(|_| Msg::Clear)}>{ "Clear" }</button>
        },
        SelectionMode::Remove | SelectionMode::Edit => html! {
            <button class="btn text secondary" disabled={!dirty} onclick={link.callback(|_| Msg::Reset)}>{ "Reset" }</button>
        },
    };

    html! {
        <footer class="dialog-actions">
            { secondary }
            <button class="btn outlined primary" onclick={link.callback(|_| Msg::Save)}>{ "Save" }</button>
        </footer>
    }
}
