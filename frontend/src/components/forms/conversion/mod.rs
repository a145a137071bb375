//! Conversion form: wraps a tool's fields in a `<form>` and runs the
//! submit cycle against the form's endpoint.
//!
//! A submission serializes the form, disables the submit button, posts the
//! payload and hands the outcome to the page. Failures raise a blocking
//! alert once the restored button has been rendered.

use yew::prelude::*;

use crate::browser::show_alert;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ConversionFormProps;
pub use state::ConversionFormComponent;

impl Component for ConversionFormComponent {
    type Message = Msg;
    type Properties = ConversionFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConversionFormComponent::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(message) = self.submission.take_alert() {
            show_alert(&message);
        }
    }
}
