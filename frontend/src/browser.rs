//! Browser primitives used by the components: blocking alerts, the system
//! clipboard, multipart payloads and JSON POST requests.
//!
//! Everything here reports failures as plain `String` details. Callers turn
//! those into the typed failures from `common` and decide whether the user
//! sees an alert or an inline message.

use common::requests::FILE_FIELD;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlFormElement};

/// HTTP status plus the parsed body, or the reason the body did not parse.
pub struct Reply<T> {
    pub status: u16,
    pub body: Result<T, String>,
}

/// Shows a blocking `window.alert`.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Writes `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| describe(&err))
}

/// Serializes the current fields of `form`.
pub fn form_data(form: &HtmlFormElement) -> Result<FormData, String> {
    FormData::new_with_form(form).map_err(|err| describe(&err))
}

/// Payload carrying a single file under the `file` field. The file name is
/// sent along because the server checks the extension.
pub fn file_form_data(file: &File) -> Result<FormData, String> {
    let data = FormData::new().map_err(|err| describe(&err))?;
    data.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|err| describe(&err))?;
    Ok(data)
}

/// POSTs a multipart payload and parses the JSON reply.
///
/// `Err` means no response was received. A response whose body is not the
/// expected JSON comes back as `Ok` with `body` set to the parse error, so
/// the caller still sees the status.
pub async fn post_form<T: DeserializeOwned>(url: &str, data: FormData) -> Result<Reply<T>, String> {
    let response = Request::post(url)
        .body(data)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let status = response.status();
    let body = match response.text().await {
        Ok(text) => serde_json::from_str::<T>(&text).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };
    Ok(Reply { status, body })
}

/// Readable text for a JavaScript exception or rejection value.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::HtmlInputElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn file_payload_keeps_file_name() {
        let parts = js_sys::Array::of1(&JsValue::from_str("Name,Email\nAnn,ann@example.com\n"));
        let file = File::new_with_str_sequence(&parts, "people.csv").expect("file");

        let data = file_form_data(&file).expect("form data");
        let sent: File = data.get(FILE_FIELD).dyn_into().expect("file entry");
        assert_eq!(sent.name(), "people.csv");
    }

    #[wasm_bindgen_test]
    fn form_payload_reads_current_fields() {
        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        let form: HtmlFormElement = document
            .create_element("form")
            .expect("form")
            .dyn_into()
            .expect("form element");
        let input: HtmlInputElement = document
            .create_element("input")
            .expect("input")
            .dyn_into()
            .expect("input element");
        input.set_name("output_method");
        input.set_value("display");
        form.append_child(&input).expect("append");

        let data = form_data(&form).expect("form data");
        assert_eq!(data.get("output_method").as_string().as_deref(), Some("display"));
    }

    #[wasm_bindgen_test]
    fn describe_prefers_error_message() {
        let error: JsValue = js_sys::Error::new("clipboard blocked").into();
        assert_eq!(describe(&error), "clipboard blocked");
        assert_eq!(describe(&JsValue::from_str("plain")), "plain");
    }
}
