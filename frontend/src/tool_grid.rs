use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ToolGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Card grid of the tool menu.
pub struct ToolGrid;

impl Component for ToolGrid {
    type Message = ();
    type Properties = ToolGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ToolGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 16px;
             margin: 24px 0;",
            props.columns.max(1)
        );

        html! {
            <div class="tool-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
