//! Mapping dialog: attach and detach smells, tastes and properties of one
//! terpene, then save the whole aggregate.
//!
//! The dialog is mounted when opened and unmounted on close, so the
//! vocabularies are fetched fresh every time it opens.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::log_error;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MappingDialogProps;
pub use state::MappingDialog;

impl Component for MappingDialog {
    type Message = Msg;
    type Properties = MappingDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        MappingDialog::new(ctx.props())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if !self.selection.is_for(props.mode, props.terpene.terpene_id) {
            self.reseed(props);
        }
        props != old_props
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let client = ctx.props().client.clone();
            spawn_local(async move {
                match client.vocabulary().await {
                    Ok(vocabulary) => link.send_message(Msg::VocabularyLoaded(vocabulary)),
                    Err(e) => log_error("Error fetching data", e),
                }
            });
        }
    }
}
