use common::model::{Id, Terpene};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TerpeneSelectProps {
    pub terpenes: Vec<Terpene>,
    pub selected: Option<Id>,
    /// `None` when the placeholder option is picked.
    pub on_change: Callback<Option<Id>>,
}

/// Dropdown of every terpene returned by the API.
pub struct TerpeneSelect;

impl Component for TerpeneSelect {
    type Message = ();
    type Properties = TerpeneSelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TerpeneSelect
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = {
            let on_change = props.on_change.clone();
            Callback::from(move |e: Event| {
                let picked = e
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                    .and_then(|select| select.value().parse::<Id>().ok());
                on_change.emit(picked);
            })
        };

        html! {
            <select class="terpene-select" {onchange}>
                <option value="" selected={props.selected.is_none()}>{ "Select a terpene" }</option>
                {
                    for props.terpenes.iter().enumerate().map(|(index, terpene)| html! {
                        <option
                            value={terpene.id.to_string()}
                            selected={props.selected == Some(terpene.id)}
                            class={if index % 2 == 0 { "row-even" } else { "row-odd" }}
                        >
                            { terpene.name.clone() }
                        </option>
                    })
                }
            </select>
        }
    }
}
