//! The four conversion tools and the pieces their forms share.

use common::model::conversion::ConversionOutcome;
use common::requests::FormOutput;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub mod clipboard;
pub mod from_json;
pub mod json;
pub mod list;

/// A conversion tool reachable from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    List,
    Json,
    FromJson,
    Clipboard,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::List, Tool::Json, Tool::FromJson, Tool::Clipboard];

    pub fn title(self) -> &'static str {
        match self {
            Tool::List => "Column to List",
            Tool::Json => "Columns to JSON",
            Tool::FromJson => "JSON to Table",
            Tool::Clipboard => "Clipboard Data",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::List => "Turn one column of an Excel or CSV file into a list.",
            Tool::Json => "Export selected columns as JSON records.",
            Tool::FromJson => "Convert a JSON file of records into CSV or Excel.",
            Tool::Clipboard => "Convert pasted table data, JSON or free text.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::List => "fas fa-list",
            Tool::Json => "fas fa-code",
            Tool::FromJson => "fas fa-table",
            Tool::Clipboard => "fas fa-clipboard",
        }
    }
}

/// Callbacks every tool forwards to its conversion form.
#[derive(Properties, PartialEq, Clone)]
pub struct ToolProps {
    pub on_started: Callback<()>,
    pub on_converted: Callback<ConversionOutcome>,
}

/// Radio group for the `output_method` field of the file based tools.
///
/// The choice is held by the tool so that re-rendering never resets it.
pub fn output_method_group(
    id_prefix: &str,
    methods: &[FormOutput],
    selected: FormOutput,
    on_select: Callback<FormOutput>,
) -> Html {
    let radios = methods
        .iter()
        .copied()
        .map(|method| {
            let id = format!("{}-output-{}", id_prefix, method.value());
            let on_select = on_select.clone();
            html! {
                <div class="radio-option" key={id.clone()}>
                    <input
                        type="radio"
                        id={id.clone()}
                        name={FormOutput::FIELD}
                        value={method.value()}
                        checked={method == selected}
                        onchange={Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            if input.checked() {
                                on_select.emit(method);
                            }
                        })}
                    />
                    <label for={id}>{ method.label() }</label>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="form-group">
            <span class="group-label">{ "Output" }</span>
            { radios }
        </div>
    }
}
