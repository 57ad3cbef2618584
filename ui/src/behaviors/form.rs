//! Form submission behavior.
//!
//! Intercepts the designated form's submit event and POSTs its fields as
//! JSON, tagged with the form-type discriminator. The submit control is
//! disabled with a busy label while the request is in flight and restored
//! on every completion path. Success clears the form and confirms with the
//! submitted contact details; business or transport failure shows the error
//! and leaves the entered values intact.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::payload::{self, FORM_TYPE};

/// Label shown on the submit control while the request is in flight.
const BUSY_LABEL: &str = "Submitting...";

/// Response shape of the submission endpoint.
#[derive(Debug, serde::Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Submit-intercept binding for the price calculator form.
pub struct FormSubmit {
    form: HtmlFormElement,
    on_submit: Closure<dyn FnMut(Event)>,
}

impl FormSubmit {
    /// Bind to the form with `form_id`; `None` when it is absent.
    pub fn bind(
        document: &Document,
        form_id: &str,
        endpoint: &str,
    ) -> Result<Option<Self>, JsValue> {
        let Some(element) = document.get_element_by_id(form_id) else {
            return Ok(None);
        };
        let form: HtmlFormElement = element.dyn_into()?;
        let endpoint = endpoint.to_string();

        let on_submit = {
            let form = form.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                let form = form.clone();
                let endpoint = endpoint.clone();
                spawn_local(async move {
                    submit(&form, &endpoint).await;
                });
            })
        };
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

        Ok(Some(Self { form, on_submit }))
    }

    /// Detach the listener.
    pub fn release(self) -> Result<(), JsValue> {
        self.form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref())
    }
}

/// Run one submission: busy state, POST, user feedback, restore.
async fn submit(form: &HtmlFormElement, endpoint: &str) {
    let fields = collect_fields(form);
    let body = payload::build(&fields, FORM_TYPE);

    let submit_btn = form
        .query_selector(".submit-btn")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = submit_btn
        .as_ref()
        .and_then(|btn| btn.text_content())
        .unwrap_or_default();
    if let Some(btn) = &submit_btn {
        btn.set_disabled(true);
        btn.set_text_content(Some(BUSY_LABEL));
    }

    match post_submission(endpoint, &body).await {
        Ok(result) if result.success => {
            show_alert(&payload::confirmation_message(&fields));
            form.reset();
        }
        Ok(result) => {
            let message = result
                .error
                .unwrap_or_else(|| "Unknown error occurred".to_string());
            show_alert(&format!("Error: {message}"));
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "Form submission error: {err}"
            )));
            show_alert("Error: Network error. Please try again.");
        }
    }

    // Restore the control on every completion path
    if let Some(btn) = &submit_btn {
        btn.set_disabled(false);
        btn.set_text_content(Some(&original_label));
    }
}

/// POST the payload and decode the endpoint's JSON verdict.
async fn post_submission(
    endpoint: &str,
    body: &serde_json::Value,
) -> Result<SubmitResponse, gloo_net::Error> {
    let response = gloo_net::http::Request::post(endpoint)
        .json(body)?
        .send()
        .await?;
    response.json::<SubmitResponse>().await
}

/// Field name/value pairs from the form's current inputs.
fn collect_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let Ok(data) = FormData::new_with_form(form) else {
        return fields;
    };
    let entries: JsValue = data.entries().into();
    for entry in js_sys::Array::from(&entries).iter() {
        let pair = js_sys::Array::from(&entry);
        let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
            continue;
        };
        fields.push((name, value));
    }
    fields
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
