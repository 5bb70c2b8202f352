use yew::{html, Component, Context, Html};

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar">
                <span class="navbar-title">{ "Terpene Mapping" }</span>
            </nav>
        }
    }
}
