//! Update function of the conversion form.
//!
//! `Msg::Submit` starts a request unless one is already in flight for this
//! form. `Msg::Finished` always clears the in-flight flag; a failure alert
//! is raised from `rendered`, after the button is back.

use gloo_console::{error, log};
use web_sys::{FormData, HtmlFormElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::conversion::{
    interpret_submission, ConversionOutcome, ConversionResponse, SubmissionFailure,
};

use crate::browser::{form_data, post_form};

use super::messages::Msg;
use super::state::ConversionFormComponent;

pub fn update(
    component: &mut ConversionFormComponent,
    ctx: &Context<ConversionFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Submit => {
            let Some(form) = component.form_ref.cast::<HtmlFormElement>() else {
                return false;
            };
            if !component.submission.begin() {
                return false;
            }

            let data = match form_data(&form) {
                Ok(data) => data,
                Err(detail) => return finish(component, ctx, Err(SubmissionFailure::Transport(detail))),
            };

            ctx.props().on_started.emit(());

            let endpoint = ctx.props().target.endpoint();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = submit(endpoint, data).await;
                link.send_message(Msg::Finished(result));
            });
            true
        }
        Msg::Finished(result) => finish(component, ctx, result),
    }
}

fn finish(
    component: &mut ConversionFormComponent,
    ctx: &Context<ConversionFormComponent>,
    result: Result<ConversionOutcome, SubmissionFailure>,
) -> bool {
    if let Err(failure) = &result {
        error!("Submission error:", failure.to_string());
    }
    if let Some(outcome) = component.submission.finish(result) {
        log!("Conversion finished:", ctx.props().target.endpoint());
        ctx.props().on_converted.emit(outcome);
    }
    true
}

async fn submit(
    endpoint: &'static str,
    data: FormData,
) -> Result<ConversionOutcome, SubmissionFailure> {
    let reply = post_form::<ConversionResponse>(endpoint, data)
        .await
        .map_err(SubmissionFailure::Transport)?;
    interpret_submission(reply.status, reply.body)
}
