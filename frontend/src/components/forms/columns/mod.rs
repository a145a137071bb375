//! Column picker: a file input plus the container that lists the file's
//! columns as radio buttons or checkboxes.
//!
//! Choosing a file posts it to the header discovery endpoint and replaces
//! the container's contents with one control per returned header. Failures
//! stay inside the container as a placeholder message. Checkbox pickers can
//! carry a select-all button.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ColumnSelectorProps;
pub use state::ColumnSelectorComponent;

impl Component for ColumnSelectorComponent {
    type Message = Msg;
    type Properties = ColumnSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ColumnSelectorComponent::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
