//! Bridge to the native host process.
//!
//! Inbound, the host pushes `add_channel` and `set_current_channel` through
//! the Tauri event API; each subscription validates and decodes the payload,
//! then feeds the update loop.  Outbound, commands go through `invoke`.  Both
//! directions use the `window.__TAURI__` globals injected by the shell before
//! this module loads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::constants::{CMD_CHANNEL_SELECT, EVENT_ADD_CHANNEL, EVENT_SET_CURRENT_CHANNEL};
use crate::error::ViewError;
use crate::messages::{Command, Message};
use crate::models::{Channel, ChannelId, CurrentChannel};
use crate::schema_validation;
use crate::state::{dispatch, ViewContext};
use crate::toast;

#[wasm_bindgen]
extern "C" {
    /// `window.__TAURI__.event.listen` – resolves to an unlisten function we
    /// never use: subscriptions persist for the process lifetime.
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    fn listen(
        event: &str,
        handler: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Promise, JsValue>;

    /// `window.__TAURI__.tauri.invoke`
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "tauri"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Outbound command port.  The production sink talks to the Tauri bridge;
/// tests install a recording sink instead.
pub trait CommandSink {
    fn send(&self, command: Command);
}

/// Sink backed by `invoke`.  Invocations are fire-and-forget as far as the
/// domain goes – the host reflects a selection by pushing a fresh
/// `set_current_channel`, not through the returned promise – so only
/// rejections are observed here.
pub struct TauriSink;

#[derive(Serialize)]
struct SelectChannelArgs {
    id: ChannelId,
}

impl CommandSink for TauriSink {
    fn send(&self, command: Command) {
        match command {
            Command::SelectChannel { id } => {
                let args = match serde_wasm_bindgen::to_value(&SelectChannelArgs {
                    id: id.clone(),
                }) {
                    Ok(value) => value,
                    Err(err) => {
                        log::error!("failed to encode {CMD_CHANNEL_SELECT} args: {err}");
                        return;
                    }
                };
                spawn_local(async move {
                    if let Err(err) = invoke(CMD_CHANNEL_SELECT, args).await {
                        log::warn!("{CMD_CHANNEL_SELECT}({id}) rejected by host: {err:?}");
                        toast::error("Channel selection failed");
                    }
                });
            }
        }
    }
}

/// Subscribe to the host's event stream.  The listener closures are leaked
/// deliberately; there is no unsubscribe path.
pub fn subscribe(ctx: Rc<ViewContext>) -> Result<(), ViewError> {
    subscribe_event(Rc::clone(&ctx), EVENT_ADD_CHANNEL, |payload| {
        decode::<Channel>(
            EVENT_ADD_CHANNEL,
            payload,
            schema_validation::validate_add_channel,
        )
        .map(Message::ChannelAdded)
    })?;

    subscribe_event(ctx, EVENT_SET_CURRENT_CHANNEL, |payload| {
        decode::<CurrentChannel>(
            EVENT_SET_CURRENT_CHANNEL,
            payload,
            schema_validation::validate_set_current_channel,
        )
        .map(Message::CurrentChannelChanged)
    })?;

    Ok(())
}

fn subscribe_event(
    ctx: Rc<ViewContext>,
    event: &'static str,
    to_message: fn(Value) -> Result<Message, ViewError>,
) -> Result<(), ViewError> {
    let handler = Closure::wrap(Box::new(move |raw: JsValue| {
        let payload = match extract_payload(event, raw) {
            Ok(payload) => payload,
            Err(err) => return reject(err),
        };
        log::debug!("{event}: {payload}");
        match to_message(payload) {
            Ok(msg) => dispatch(&ctx, msg),
            Err(err) => reject(err),
        }
    }) as Box<dyn FnMut(JsValue)>);

    let _unlisten = listen(event, &handler).map_err(|e| ViewError::Bridge(format!("{e:?}")))?;
    handler.forget();

    Ok(())
}

/// Pull `payload` out of the `{ event, payload, … }` object Tauri delivers.
fn extract_payload(event: &'static str, raw: JsValue) -> Result<Value, ViewError> {
    let envelope: Value = serde_wasm_bindgen::from_value(raw).map_err(|e| ViewError::Decode {
        event,
        detail: e.to_string(),
    })?;
    envelope
        .get("payload")
        .cloned()
        .ok_or(ViewError::Decode {
            event,
            detail: "missing payload field".into(),
        })
}

/// Validate `payload` against its schema, then deserialize it.  A payload
/// rejected here never reaches the DOM.
fn decode<T: DeserializeOwned>(
    event: &'static str,
    payload: Value,
    validate: fn(&Value) -> bool,
) -> Result<T, ViewError> {
    if !validate(&payload) {
        return Err(ViewError::SchemaViolation { event });
    }
    serde_json::from_value(payload).map_err(|e| ViewError::Decode {
        event,
        detail: e.to_string(),
    })
}

/// Log and surface a payload we refused to render.
fn reject(err: ViewError) {
    log::warn!("{err}");
    toast::error(&format!("Ignored a malformed host event: {err}"));
}
