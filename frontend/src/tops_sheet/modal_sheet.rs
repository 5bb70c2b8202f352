//! Centered modal container used by the mapping dialog.
//!
//! The sheet mounts hidden and gets its `show` class 50 ms later so the CSS
//! transition runs. Clicking the backdrop, the close button or pressing
//! Escape emits `on_close`; the parent decides whether to unmount it.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

pub enum Msg {
    Show,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

pub struct ModalSheet {
    shown: bool,
}

impl Component for ModalSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { shown: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show => {
                self.shown = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close_button = on_backdrop.clone();
        let on_key = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            })
        };

        html! {
            <div
                class={classes!("modal-backdrop", self.shown.then_some("show"))}
                onclick={on_backdrop}
                onkeydown={on_key}
                tabindex="-1"
            >
                <div
                    class="modal-sheet"
                    role="dialog"
                    aria-modal="true"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <header class="modal-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="modal-close" title="Close" onclick={on_close_button}>{ "✕" }</button>
                    </header>
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(50).await;
                link.send_message(Msg::Show);
            });
        }
    }
}
