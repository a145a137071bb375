use common::requests::{ConversionTarget, FROM_JSON_FORMATS, OUTPUT_FORMAT_FIELD};
use yew::{html, Component, Context, Html};

use super::ToolProps;
use crate::components::forms::conversion::ConversionFormComponent;
use crate::config::JSON_ACCEPT;

/// JSON records file to a CSV or Excel table.
pub struct FromJsonTool;

impl Component for FromJsonTool {
    type Message = ();
    type Properties = ToolProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FromJsonTool
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let formats = FROM_JSON_FORMATS
            .iter()
            .enumerate()
            .map(|(index, format)| html! {
                <option value={format.value()} selected={index == 0}>{ format.label() }</option>
            })
            .collect::<Html>();

        html! {
            <ConversionFormComponent
                target={ConversionTarget::FromJson}
                submit_label="Convert to Table"
                on_started={props.on_started.clone()}
                on_converted={props.on_converted.clone()}
            >
                <div class="form-group">
                    <label for="from-json-file">{ "JSON file (a list of records)" }</label>
                    <input type="file" id="from-json-file" name="file" accept={JSON_ACCEPT} required=true />
                </div>
                <div class="form-group">
                    <label for="from-json-format">{ "Output format" }</label>
                    <select id="from-json-format" name={OUTPUT_FORMAT_FIELD}>
                        { formats }
                    </select>
                </div>
            </ConversionFormComponent>
        }
    }
}
