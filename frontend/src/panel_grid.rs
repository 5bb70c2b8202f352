use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PanelGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Equal-width columns holding the attribute panels.
pub struct PanelGrid;

impl Component for PanelGrid {
    type Message = ();
    type Properties = PanelGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PanelGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 16px;
             width: 100%;
             margin-top: 16px;",
            props.columns.max(1)
        );

        html! {
            <div class="panel-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
