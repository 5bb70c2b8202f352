use common::citation::{CitationEditor, CitationSave};
use common::model::Id;
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use super::CitationPanelProps;

pub enum Msg {
    Toggle(Id),
    Draft(String),
    Save,
    Cancel,
}

/// Item names with a citation status switch. Clicking either opens an inline
/// editor for that item; opening another item closes the first.
pub struct CitationList {
    editor: CitationEditor,
}

impl Component for CitationList {
    type Message = Msg;
    type Properties = CitationPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            editor: CitationEditor::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.editor.retain(&ctx.props().items);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Toggle(id) => match props.items.iter().find(|item| item.id == id) {
                Some(item) => {
                    self.editor.toggle(item);
                    true
                }
                None => false,
            },
            Msg::Draft(text) => {
                self.editor.set_draft(text);
                true
            }
            Msg::Save => {
                let Some(id) = self.editor.open_id() else {
                    return false;
                };
                let Some(item) = props.items.iter().find(|item| item.id == id) else {
                    return false;
                };
                // Unchanged text never reaches the network.
                if let Some(citation) = self.editor.pending(item) {
                    props.on_save.emit(CitationSave {
                        kind: props.kind,
                        id,
                        name: item.name.clone(),
                        citation,
                    });
                }
                false
            }
            Msg::Cancel => {
                self.editor.cancel();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        if props.items.is_empty() {
            return html! {
                <p class="empty">{ format!("No {} available", props.kind.label()) }</p>
            };
        }

        html! {
            <div class="citation-list">
                {
                    for props.items.iter().map(|item| {
                        let id = item.id;
                        let cited = item.has_citation();
                        html! {
                            <div class="citation-item" key={id.to_string()}>
                                <div class="citation-row">
                                    <span
                                        class="citation-name"
                                        onclick={link.callback(move |_| Msg::Toggle(id))}
                                    >
                                        { item.name.clone() }
                                    </span>
                                    <button
                                        class={classes!("citation-switch", if cited { "on" } else { "off" })}
                                        title={if cited { "Has citation" } else { "No citation" }}
                                        onclick={link.callback(move |_| Msg::Toggle(id))}
                                    >
                                        { if cited { "✔" } else { "✖" } }
                                    </button>
                                </div>
                                {
                                    if self.editor.is_open(id) {
                                        self.editor_view(link)
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    })
                }
            </div>
        }
    }
}

impl CitationList {
    fn editor_view(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="citation-editor">
                <label class="citation-label">{ "Citation" }</label>
                <textarea
                    rows={6}
                    value={self.editor.draft().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::Draft(input.value())
                    })}
                />
                <div class="citation-actions">
                    <button class="btn text secondary" onclick={link.callback(|_| Msg::Save)}>{ "Save" }</button>
                    <button class="btn text danger" onclick={link.callback(|_| Msg::Cancel)}>{ "Cancel" }</button>
                </div>
            </div>
        }
    }
}
