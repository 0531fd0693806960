// Request tracing, active at full verbosity
use std::time::{SystemTime, UNIX_EPOCH};

/// Tracing is on when the verbosity level is at its maximum
pub fn is_full_debug_enabled() -> bool {
    crate::verbosity::get_verbosity_level() >= 2
}

pub fn get_timestamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Replace the value of the `key` query parameter so credentials never reach the console or logs
pub fn redact_key(url: &str) -> String {
    match url.find("key=") {
        Some(pos) => {
            let start = pos + "key=".len();
            let end = url[start..].find('&').map(|i| start + i).unwrap_or(url.len());
            format!("{}***{}", &url[..start], &url[end..])
        }
        None => url.to_string(),
    }
}

/// Blank a top-level `key` field of a JSON response body, such as the one returned on registration
pub fn redact_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(mut fields)) if fields.contains_key("key") => {
            fields.insert("key".to_string(), serde_json::Value::from("***"));
            serde_json::Value::Object(fields).to_string()
        }
        _ => body.to_string(),
    }
}

#[macro_export]
macro_rules! debug_api_call {
    ($url:expr) => {
        if $crate::debug::is_full_debug_enabled() {
            let timestamp = $crate::debug::get_timestamp();
            println!("🌐 [{}] API: GET {}", timestamp, $crate::debug::redact_key($url));
        }
    };
}

#[macro_export]
macro_rules! debug_info {
    ($($arg:tt)*) => {
        if $crate::debug::is_full_debug_enabled() {
            let timestamp = $crate::debug::get_timestamp();
            println!("ℹ️  [{}] DEBUG: {}", timestamp, format!($($arg)*));
        }
    };
}
