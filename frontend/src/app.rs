use crate::api::load_client_config;
use crate::components::mapping_page::TerpeneMappingPage;
use crate::components::navbar::Navbar;
use common::config::ClientConfig;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

pub enum Msg {
    ConfigLoaded(ClientConfig),
}

/// Root component: resolves the API configuration, then mounts the page.
pub struct App {
    config: Option<ClientConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { config: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                gloo_console::log!(format!("Using terpene API at {}", config.api_base_url));
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Navbar />
                {
                    match &self.config {
                        Some(config) => html! { <TerpeneMappingPage config={config.clone()} /> },
                        None => html! { <p class="loading">{"Loading..."}</p> },
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let config = match load_client_config().await {
                    Ok(config) => config,
                    Err(e) => {
                        // Served without the backend (e.g. `trunk serve`).
                        gloo_console::error!(format!("Error loading configuration: {}", e));
                        ClientConfig::default()
                    }
                };
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}
