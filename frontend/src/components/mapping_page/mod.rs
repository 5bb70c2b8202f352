//! Terpene mapping page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `MappingPageProps`, `TerpeneMappingPage`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the terpene list for the dropdown.

use common::model::Id;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::helpers::log_error;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MappingPageProps;
pub use state::TerpeneMappingPage;

impl Component for TerpeneMappingPage {
    type Message = Msg;
    type Properties = MappingPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        TerpeneMappingPage::new(ApiClient::new(ctx.props().config.clone()))
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.client = ApiClient::new(ctx.props().config.clone());
            self.loaded = false;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let client = self.client.clone();
            spawn_local(async move {
                match client.terpenes().await {
                    Ok(terpenes) => link.send_message(Msg::TerpenesLoaded(terpenes)),
                    Err(e) => log_error("Error fetching terpenes", e),
                }
            });
        }
    }
}

/// Fetches the aggregate of `terpene_id` and hands it to the page.
pub(crate) fn fetch_terpene(link: Scope<TerpeneMappingPage>, client: ApiClient, terpene_id: Id) {
    spawn_local(async move {
        match client.terpene_object(terpene_id).await {
            Ok(terpene) => link.send_message(Msg::TerpeneLoaded(terpene)),
            Err(e) => log_error("Error fetching terpene object", e),
        }
    });
}
