//! Root component: tool menu, the selected tool and the shared result area.
//!
//! The result area is owned here and handed to `ResultPanel` as props.
//! Tools report through callbacks; none of them touch the result area
//! directly.

use yew::{html, Component, Context, Html};

use common::model::conversion::ConversionOutcome;

use crate::components::results::ResultPanel;
use crate::components::tools::clipboard::ClipboardTool;
use crate::components::tools::from_json::FromJsonTool;
use crate::components::tools::json::JsonTool;
use crate::components::tools::list::ListTool;
use crate::components::tools::Tool;
use crate::config::APP_TITLE;
use crate::tool_grid::ToolGrid;

pub enum Msg {
    OpenTool(Tool),
    ShowMenu,
    SubmissionStarted,
    Converted(ConversionOutcome),
}

pub struct App {
    tool: Option<Tool>,
    /// Outcome of the latest successful submission. Cleared when a new
    /// submission starts.
    outcome: Option<ConversionOutcome>,
    result_visible: bool,
}

impl App {
    fn clear_result(&mut self) {
        self.outcome = None;
        self.result_visible = false;
    }

    fn build_menu(&self, ctx: &Context<Self>) -> Html {
        let cards = Tool::ALL
            .into_iter()
            .map(|tool| {
                html! {
                    <button
                        type="button"
                        class="tool-card"
                        key={tool.title()}
                        onclick={ctx.link().callback(move |_| Msg::OpenTool(tool))}
                    >
                        <i class={tool.icon()}></i>
                        <h2>{ tool.title() }</h2>
                        <p>{ tool.description() }</p>
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <ToolGrid columns={2}>
                { cards }
            </ToolGrid>
        }
    }

    fn build_tool(&self, ctx: &Context<Self>, tool: Tool) -> Html {
        let on_started = ctx.link().callback(|()| Msg::SubmissionStarted);
        let on_converted = ctx.link().callback(Msg::Converted);

        let form = match tool {
            Tool::List => html! { <ListTool {on_started} {on_converted} /> },
            Tool::Json => html! { <JsonTool {on_started} {on_converted} /> },
            Tool::FromJson => html! { <FromJsonTool {on_started} {on_converted} /> },
            Tool::Clipboard => html! { <ClipboardTool {on_started} {on_converted} /> },
        };

        html! {
            <section class="tool">
                <button type="button" class="btn btn-link" onclick={ctx.link().callback(|_| Msg::ShowMenu)}>
                    { "← All tools" }
                </button>
                <h2>{ tool.title() }</h2>
                <p class="tool-description">{ tool.description() }</p>
                { form }
                <ResultPanel outcome={self.outcome.clone()} visible={self.result_visible} />
            </section>
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tool: None,
            outcome: None,
            result_visible: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenTool(tool) => {
                self.tool = Some(tool);
                self.clear_result();
            }
            Msg::ShowMenu => {
                self.tool = None;
                self.clear_result();
            }
            Msg::SubmissionStarted => self.clear_result(),
            Msg::Converted(outcome) => {
                self.outcome = Some(outcome);
                self.result_visible = true;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <header>
                    <h1>{ APP_TITLE }</h1>
                </header>
                {
                    match self.tool {
                        Some(tool) => self.build_tool(ctx, tool),
                        None => self.build_menu(ctx),
                    }
                }
            </div>
        }
    }
}
