use common::requests::{ConversionTarget, FormOutput};
use common::ui::columns::ColumnKind;
use yew::prelude::*;

use super::{output_method_group, ToolProps};
use crate::components::forms::columns::ColumnSelectorComponent;
use crate::components::forms::conversion::ConversionFormComponent;
use crate::config::SPREADSHEET_ACCEPT;

const OUTPUTS: [FormOutput; 3] = [FormOutput::File, FormOutput::Display, FormOutput::AddToTable];

pub enum Msg {
    SelectOutput(FormOutput),
}

/// Selected spreadsheet columns to JSON records.
pub struct JsonTool {
    output: FormOutput,
}

impl Component for JsonTool {
    type Message = Msg;
    type Properties = ToolProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            output: FormOutput::File,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectOutput(output) => {
                self.output = output;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <ConversionFormComponent
                target={ConversionTarget::Json}
                submit_label="Convert to JSON"
                on_started={props.on_started.clone()}
                on_converted={props.on_converted.clone()}
            >
                <ColumnSelectorComponent
                    file_input_id="json-file"
                    container_id="json-columns-container"
                    kind={ColumnKind::Multiple}
                    select_all_id="json-select-all-btn"
                    accept={SPREADSHEET_ACCEPT}
                    file_label="Excel or CSV file"
                />
                { output_method_group("json-form", &OUTPUTS, self.output, ctx.link().callback(Msg::SelectOutput)) }
            </ConversionFormComponent>
        }
    }
}
