use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::console;

fn send(level: &str, message: &str, context: Value) {
    let line = JsValue::from_str(&format!("[{level}] {message}"));
    let context = serde_wasm_bindgen::to_value(&context).unwrap_or(JsValue::NULL);
    match level {
        "error" => console::error_2(&line, &context),
        "warn" => console::warn_2(&line, &context),
        "debug" => console::debug_2(&line, &context),
        _ => console::log_2(&line, &context),
    }
}

pub fn info(message: &str, context: Value)  { send("info",  message, context); }
pub fn warn(message: &str, context: Value)  { send("warn",  message, context); }
pub fn error(message: &str, context: Value) { send("error", message, context); }
pub fn debug(message: &str, context: Value) { send("debug", message, context); }

/// Best-effort console trace for a raw JS error value.
pub fn js_error(label: &str, value: &JsValue) {
    let detail = js_sys::JSON::stringify(value)
        .ok()
        .and_then(|j| j.as_string())
        .unwrap_or_else(|| "<unstringifiable>".to_string());
    console::error_2(&JsValue::from_str(label), &JsValue::from_str(&detail));
}
