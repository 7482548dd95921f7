use std::sync::atomic::{AtomicU8, Ordering};

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            _ => Self::Warn,
        }
    }
}

pub fn set_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn level() -> LogLevel {
    LogLevel::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

/// Emits one JSON line when `level` passes the global minimum.
pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < self::level() {
        return;
    }

    emit(level, &render_event(now_unix_millis(), level, event, fields));
}

pub fn render_event(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::from(ts));
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            // reserved keys win over caller fields
            payload.entry(key).or_insert(value);
        }
    }

    serde_json::Value::Object(payload).to_string()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Warn => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_from_debug_to_warn() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn parse_accepts_known_names_case_insensitively() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("Warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn rendered_event_merges_fields_into_one_object() {
        let line = render_event(
            1_700_000_000_000,
            LogLevel::Info,
            "http_request",
            json!({ "path": "/index.html", "status": 200 }),
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["ts"], json!(1_700_000_000_000u64));
        assert_eq!(parsed["level"], json!("info"));
        assert_eq!(parsed["event"], json!("http_request"));
        assert_eq!(parsed["path"], json!("/index.html"));
        assert_eq!(parsed["status"], json!(200));
    }

    #[test]
    fn caller_fields_cannot_override_reserved_keys() {
        let line = render_event(5, LogLevel::Warn, "real", json!({ "event": "spoofed" }));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["event"], json!("real"));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = render_event(5, LogLevel::Debug, "tick", json!("loose"));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
    }
}
