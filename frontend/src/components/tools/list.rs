use common::requests::{ConversionTarget, FormOutput};
use common::ui::columns::ColumnKind;
use yew::prelude::*;

use super::{output_method_group, ToolProps};
use crate::components::forms::columns::ColumnSelectorComponent;
use crate::components::forms::conversion::ConversionFormComponent;
use crate::config::SPREADSHEET_ACCEPT;

const OUTPUTS: [FormOutput; 2] = [FormOutput::File, FormOutput::Display];

pub enum Msg {
    SelectOutput(FormOutput),
}

/// Single column of a spreadsheet to a list.
pub struct ListTool {
    output: FormOutput,
}

impl Component for ListTool {
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
                target={ConversionTarget::List}
                submit_label="Convert to List"
                on_started={props.on_started.clone()}
                on_converted={props.on_converted.clone()}
            >
                <ColumnSelectorComponent
                    file_input_id="list-file"
                    container_id="columns-container"
                    kind={ColumnKind::Single}
                    accept={SPREADSHEET_ACCEPT}
                    file_label="Excel or CSV file"
                />
                { output_method_group("list-form", &OUTPUTS, self.output, ctx.link().callback(Msg::SelectOutput)) }
            </ConversionFormComponent>
        }
    }
}
