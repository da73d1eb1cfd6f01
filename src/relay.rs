use crate::animator::has_global;
use crate::config::EmailRelayConfig;
use crate::core::{EmailParams, RelayOutcome};
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fire-and-forget email relay capability.
pub trait EmailRelay {
    fn send(&self, params: &EmailParams);
}

/// The page's `emailjs` client library.
pub struct EmailJsRelay {
    client: JsValue,
    send: js_sys::Function,
    config: EmailRelayConfig,
}

impl EmailJsRelay {
    fn from_global(config: EmailRelayConfig) -> Option<Self> {
        let client = js_sys::Reflect::get(&js_sys::global(), &"emailjs".into()).ok()?;
        let send = js_sys::Reflect::get(&client, &"send".into())
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some(Self {
            client,
            send,
            config,
        })
    }
}

impl EmailRelay for EmailJsRelay {
    fn send(&self, params: &EmailParams) {
        let vars = match serde_wasm_bindgen::to_value(params) {
            Ok(v) => v,
            Err(e) => {
                log::error!("[inquiry] email params serialisation failed: {}", e);
                return;
            }
        };
        let res = self.send.call3(
            &self.client,
            &JsValue::from_str(&self.config.service_id),
            &JsValue::from_str(&self.config.template_id),
            &vars,
        );
        match res {
            Ok(ret) => {
                if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("[inquiry] email relay rejected: {:?}", e);
                        }
                    });
                }
            }
            Err(e) => log::warn!("[inquiry] email relay threw: {:?}", e),
        }
    }
}

/// Used when no email client is loaded.
pub struct NoEmailRelay;

impl EmailRelay for NoEmailRelay {
    fn send(&self, _params: &EmailParams) {
        log::debug!("[inquiry] no email relay on page; skipped");
    }
}

pub fn detect_email(config: &EmailRelayConfig) -> Box<dyn EmailRelay> {
    if has_global("emailjs") {
        if let Some(r) = EmailJsRelay::from_global(config.clone()) {
            return Box::new(r);
        }
    }
    Box::new(NoEmailRelay)
}

/// POST the form's native multipart body to the form relay.
pub async fn post_form(endpoint: &str, form: &web::HtmlFormElement) -> RelayOutcome {
    let body = match web::FormData::new_with_form(form) {
        Ok(b) => b,
        Err(e) => return RelayOutcome::NetworkError(format!("{:?}", e)),
    };
    match Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(resp) => RelayOutcome::Status(resp.status()),
        Err(e) => RelayOutcome::NetworkError(e.to_string()),
    }
}
