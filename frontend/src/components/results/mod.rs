//! Shared result area of the conversion pages.
//!
//! The page owns the current outcome and passes it down; this component
//! only renders it and runs the copy action. The copy button is shown for
//! inline text results only.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::conversion::{download_label, ConversionOutcome};
use common::ui::feedback::{CopyFeedback, COPY_FEEDBACK_MS};
use common::ui::options::display_style;
use common::ui::sequence::Ticket;

use crate::browser::{copy_to_clipboard, show_alert};
use crate::config::{COPIED_LABEL, COPY_FAILED_ALERT, COPY_LABEL};

#[derive(Properties, PartialEq, Clone)]
pub struct ResultPanelProps {
    /// Outcome of the most recent successful submission.
    pub outcome: Option<ConversionOutcome>,
    /// False while a submission is in flight or before the first one.
    pub visible: bool,
}

pub enum Msg {
    Copy,
    Copied,
    CopyFailed(String),
    ResetCopy(Ticket),
}

#[derive(Default)]
pub struct ResultPanel {
    feedback: CopyFeedback,
}

impl Component for ResultPanel {
    type Message = Msg;
    type Properties = ResultPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Copy => {
                let Some(text) = ctx
                    .props()
                    .outcome
                    .as_ref()
                    .and_then(|outcome| outcome.copyable_text())
                    .map(str::to_string)
                else {
                    return false;
                };

                let link = ctx.link().clone();
                spawn_local(async move {
                    match copy_to_clipboard(&text).await {
                        Ok(()) => link.send_message(Msg::Copied),
                        Err(detail) => link.send_message(Msg::CopyFailed(detail)),
                    }
                });
                false
            }
            Msg::Copied => {
                let ticket = self.feedback.confirm();
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    link.send_message(Msg::ResetCopy(ticket));
                });
                true
            }
            Msg::CopyFailed(detail) => {
                error!("Failed to copy:", detail);
                show_alert(COPY_FAILED_ALERT);
                false
            }
            Msg::ResetCopy(ticket) => self.feedback.expire(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let copyable = props.visible
            && props
                .outcome
                .as_ref()
                .is_some_and(|outcome| outcome.copyable_text().is_some());

        html! {
            <div id="result-container" class="result-container" style={display_style(props.visible)}>
                <div class="result-header">
                    <h3>{ "Result" }</h3>
                    <button
                        type="button"
                        id="copy-btn"
                        class="btn btn-secondary copy-btn"
                        style={if copyable { "display: inline-block;" } else { "display: none;" }}
                        onclick={ctx.link().callback(|_| Msg::Copy)}
                    >
                        { self.build_copy_label() }
                    </button>
                </div>
                <div id="result-content">
                    { build_content(props.outcome.as_ref()) }
                </div>
            </div>
        }
    }
}

impl ResultPanel {
    fn build_copy_label(&self) -> Html {
        if self.feedback.is_copied() {
            html! { <><i class="fas fa-check"></i>{ COPIED_LABEL }</> }
        } else {
            html! { <><i class="fas fa-copy"></i>{ COPY_LABEL }</> }
        }
    }
}

fn build_content(outcome: Option<&ConversionOutcome>) -> Html {
    match outcome {
        Some(ConversionOutcome::Download { url, file_name }) => html! {
            <a id="download-link" href={url.clone()} download="">
                { download_label(file_name) }
            </a>
        },
        Some(ConversionOutcome::Display { text }) => html! {
            <pre class="result-display">{ text.clone() }</pre>
        },
        Some(ConversionOutcome::Empty) | None => html! {},
    }
}
