//! View of the column picker: the file input, the optional select-all
//! button and the column container.

use common::ui::columns::{ColumnKind, ColumnOption, ColumnPanel};
use common::ui::options::display_style;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ColumnSelectorComponent;

pub fn view(component: &ColumnSelectorComponent, ctx: &Context<ColumnSelectorComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    html! {
        <>
            <div class="form-group">
                <label for={props.file_input_id.clone()}>{ props.file_label.clone() }</label>
                <input
                    type="file"
                    id={props.file_input_id.clone()}
                    name="file"
                    accept={props.accept.clone()}
                    required=true
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FileChanged(input.files().and_then(|files| files.get(0)))
                    })}
                />
            </div>
            <div class="form-group">
                <div class="columns-header">
                    <span>{ column_heading(props.kind) }</span>
                    { build_select_all(component, link, props.select_all_id.clone()) }
                </div>
                <div id={props.container_id.clone()} class="columns-container">
                    { build_panel(component.picker.panel(), link) }
                </div>
            </div>
        </>
    }
}

fn column_heading(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Single => "Select a column",
        ColumnKind::Multiple => "Select columns",
    }
}

/// The select-all button stays in the DOM and is only hidden, so its id is
/// always resolvable.
fn build_select_all(
    component: &ColumnSelectorComponent,
    link: &Scope<ColumnSelectorComponent>,
    button_id: Option<AttrValue>,
) -> Html {
    let Some(button_id) = button_id else {
        return html! {};
    };

    let label = match component.picker.panel() {
        ColumnPanel::Ready(columns) => columns.select_all_label().text(),
        _ => "Select All",
    };

    html! {
        <button
            type="button"
            id={button_id}
            class="btn btn-secondary"
            style={display_style(component.picker.panel().shows_select_all())}
            onclick={link.callback(|_| Msg::ToggleAll)}
        >
            { label }
        </button>
    }
}

fn build_panel(panel: &ColumnPanel, link: &Scope<ColumnSelectorComponent>) -> Html {
    if let Some(text) = panel.placeholder() {
        return html! {
            <p class={classes!("placeholder-text", panel.is_error().then_some("error-text"))}>
                { text.to_string() }
            </p>
        };
    }

    match panel {
        ColumnPanel::Ready(columns) => columns
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| build_control(columns.kind(), index, option, link))
            .collect::<Html>(),
        _ => html! {},
    }
}

fn build_control(
    kind: ColumnKind,
    index: usize,
    option: &ColumnOption,
    link: &Scope<ColumnSelectorComponent>,
) -> Html {
    html! {
        <div class="selection-wrapper" key={option.id.clone()}>
            <input
                type={kind.input_type()}
                id={option.id.clone()}
                name={kind.field_name()}
                value={option.header.clone()}
                checked={option.checked}
                onchange={link.callback(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetChecked(index, input.checked())
                })}
            />
            <label for={option.id.clone()}>{ option.header.clone() }</label>
        </div>
    }
}
