//! Payload validation helpers – compiled into WASM.
//!
//! Inbound payloads are checked against embedded JSON Schemas before they are
//! deserialized, so a malformed push is rejected whole instead of faulting
//! mid-render.

use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref ADD_CHANNEL_SCHEMA: JSONSchema =
        compile(include_str!("schema/add_channel_schema.json"));
    static ref SET_CURRENT_CHANNEL_SCHEMA: JSONSchema =
        compile(include_str!("schema/set_current_channel_schema.json"));
}

fn compile(raw: &str) -> JSONSchema {
    let parsed: Value = serde_json::from_str(raw).expect("embedded schema must be valid JSON");
    JSONSchema::compile(&parsed).expect("embedded schema must compile")
}

/// Validate an `add_channel` payload.
pub fn validate_add_channel(value: &Value) -> bool {
    ADD_CHANNEL_SCHEMA.validate(value).is_ok()
}

/// Validate a `set_current_channel` payload.
pub fn validate_set_current_channel(value: &Value) -> bool {
    SET_CURRENT_CHANNEL_SCHEMA.validate(value).is_ok()
}
