//! Update function of the column picker.
//!
//! Every file change takes a new ticket from the picker. A response is
//! applied only while its ticket is still the latest, so a slow response to
//! an earlier file can never overwrite the columns of a later one.

use gloo_console::{error, log};
use web_sys::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::headers::{interpret_headers, HeadersFailure, HeadersResponse};
use common::requests::GET_HEADERS_PATH;

use crate::browser::{file_form_data, post_form};

use super::messages::Msg;
use super::state::ColumnSelectorComponent;

pub fn update(
    component: &mut ColumnSelectorComponent,
    ctx: &Context<ColumnSelectorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FileChanged(None) => false,
        Msg::FileChanged(Some(file)) => {
            let ticket = component.picker.start();

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = fetch_headers(&file).await;
                link.send_message(Msg::HeadersLoaded { ticket, result });
            });
            true
        }
        Msg::HeadersLoaded { ticket, result } => {
            let props = ctx.props();
            if let Err(failure) = &result {
                error!("Error fetching headers:", failure.to_string());
            }
            let applied = component
                .picker
                .finish(ticket, props.container_id.as_str(), props.kind, result);
            if !applied {
                log!("Discarding superseded header response for", props.container_id.as_str());
            }
            applied
        }
        Msg::SetChecked(index, checked) => match component.picker.columns_mut() {
            Some(columns) => {
                columns.set_checked(index, checked);
                true
            }
            None => false,
        },
        Msg::ToggleAll => component
            .picker
            .columns_mut()
            .is_some_and(|columns| columns.toggle_all()),
    }
}

async fn fetch_headers(file: &File) -> Result<Vec<String>, HeadersFailure> {
    let data = file_form_data(file).map_err(HeadersFailure::Transport)?;
    let reply = post_form::<HeadersResponse>(GET_HEADERS_PATH, data)
        .await
        .map_err(HeadersFailure::Transport)?;
    interpret_headers(reply.status, reply.body)
}
