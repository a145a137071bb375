//! Clipboard tool: converts pasted text according to the selected action.
//!
//! Each action has its own option panel. Only the selected action's panel
//! is visible, and a panel's file format group is visible only while its
//! output is set to "file". Hidden panels keep their fields; the server
//! reads the ones that belong to the submitted action.

use common::requests::clipboard::{ACTION_FIELD, DATA_FIELD};
use common::requests::ConversionTarget;
use common::ui::options::{display_style, ClipboardAction, ClipboardOptions, OutputMethod};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::ToolProps;
use crate::components::forms::conversion::ConversionFormComponent;

pub enum Msg {
    SelectAction(ClipboardAction),
    SelectOutput(ClipboardAction, OutputMethod),
}

pub struct ClipboardTool {
    options: ClipboardOptions,
}

impl Component for ClipboardTool {
    type Message = Msg;
    type Properties = ToolProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            options: ClipboardOptions::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectAction(action) => self.options.select_action(action),
            Msg::SelectOutput(action, method) => self.options.select_output(action, method),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <ConversionFormComponent
                target={ConversionTarget::Clipboard}
                submit_label="Process Data"
                on_started={props.on_started.clone()}
                on_converted={props.on_converted.clone()}
            >
                <div class="form-group">
                    <label for="clipboard-data">{ "Pasted data" }</label>
                    <textarea
                        id="clipboard-data"
                        name={DATA_FIELD}
                        rows="10"
                        required=true
                        placeholder="Paste rows copied from a spreadsheet, a JSON array, or any text"
                    />
                </div>
                { self.build_action_group(link) }
                { for ClipboardAction::ALL.into_iter().map(|action| self.build_panel(action, link)) }
            </ConversionFormComponent>
        }
    }
}

impl ClipboardTool {
    fn build_action_group(&self, link: &Scope<Self>) -> Html {
        let radios = ClipboardAction::ALL
            .into_iter()
            .map(|action| {
                html! {
                    <div class="radio-option" key={action.input_id()}>
                        <input
                            type="radio"
                            id={action.input_id()}
                            name={ACTION_FIELD}
                            value={action.value()}
                            checked={self.options.action() == action}
                            onchange={link.batch_callback(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                input.checked().then_some(Msg::SelectAction(action))
                            })}
                        />
                        <label for={action.input_id()}>{ action.label() }</label>
                    </div>
                }
            })
            .collect::<Html>();

        html! {
            <div class="form-group">
                <span class="group-label">{ "Action" }</span>
                { radios }
            </div>
        }
    }

    fn build_panel(&self, action: ClipboardAction, link: &Scope<Self>) -> Html {
        let outputs = OutputMethod::ALL
            .into_iter()
            .map(|method| {
                let id = action.output_input_id(method);
                html! {
                    <div class="radio-option" key={id.clone()}>
                        <input
                            type="radio"
                            id={id.clone()}
                            name={action.output_field()}
                            value={method.value()}
                            checked={self.options.output(action) == method}
                            onchange={link.batch_callback(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                input.checked().then_some(Msg::SelectOutput(action, method))
                            })}
                        />
                        <label for={id}>{ method.label() }</label>
                    </div>
                }
            })
            .collect::<Html>();

        let formats = action
            .file_formats()
            .iter()
            .enumerate()
            .map(|(index, format)| html! {
                <option value={format.value()} selected={index == 0}>{ format.label() }</option>
            })
            .collect::<Html>();

        html! {
            <div
                id={action.panel_id()}
                class="option-panel"
                key={action.panel_id()}
                style={display_style(self.options.is_panel_visible(action))}
            >
                <div class="form-group">
                    <span class="group-label">{ "Output" }</span>
                    { outputs }
                </div>
                <div
                    id={action.format_group_id()}
                    class="form-group"
                    style={display_style(self.options.is_format_group_visible(action))}
                >
                    <label for={action.format_field()}>{ "File format" }</label>
                    <select id={action.format_field()} name={action.format_field()}>
                        { formats }
                    </select>
                </div>
            </div>
        }
    }
}
