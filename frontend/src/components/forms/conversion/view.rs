use yew::prelude::*;

use super::messages::Msg;
use super::state::ConversionFormComponent;

pub fn view(component: &ConversionFormComponent, ctx: &Context<ConversionFormComponent>) -> Html {
    let props = ctx.props();
    let submission = &component.submission;

    html! {
        <form
            id={props.target.form_id()}
            class="conversion-form"
            ref={component.form_ref.clone()}
            onsubmit={ctx.link().callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { props.children.clone() }
            <button type="submit" class="btn btn-primary" disabled={submission.is_in_flight()}>
                { submission.button_label(props.submit_label.as_str()).to_string() }
            </button>
        </form>
    }
}
