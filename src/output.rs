//! Human and machine output
//!
//! - human mode: rendered text on stdout, errors on stderr
//! - `--json` mode: JSON Lines events on stdout, each with schema version (v: 1)

use std::cell::RefCell;

use serde::Serialize;
use serde_json::{json, Value};

use crate::commands::ArgError;
use crate::config::ConfigError;
use crate::netbox::NetboxError;
use crate::pager::PagerError;

const SCHEMA_VERSION: u8 = 1;

/// Event wrapper with schema version
#[derive(Serialize)]
struct Event<T: Serialize> {
    v: u8,
    #[serde(rename = "type")]
    event_type: String,
    payload: T,
}

fn event_line<T: Serialize>(event_type: &str, payload: T) -> String {
    let event = Event {
        v: SCHEMA_VERSION,
        event_type: event_type.to_string(),
        payload,
    };
    serde_json::to_string(&event).unwrap_or_else(|e| {
        json!({"v": SCHEMA_VERSION, "type": "error", "payload": {"message": e.to_string()}})
            .to_string()
    })
}

/// Output handler
pub struct Output {
    json_mode: bool,
    color: bool,
    /// Collects stdout writes instead of printing them
    capture: Option<RefCell<Vec<String>>>,
}

impl Output {
    pub fn new(json_mode: bool, color: bool) -> Self {
        Self {
            json_mode,
            color,
            capture: None,
        }
    }

    /// Output that keeps everything it would print, for assertions
    #[cfg(test)]
    pub fn capturing(json_mode: bool) -> Self {
        Self {
            capture: Some(RefCell::new(Vec::new())),
            ..Self::new(json_mode, false)
        }
    }

    /// Everything written so far, concatenated
    #[cfg(test)]
    pub fn captured(&self) -> String {
        self.capture
            .as_ref()
            .map(|buf| buf.borrow().concat())
            .unwrap_or_default()
    }

    /// Captured JSON Lines events, parsed
    #[cfg(test)]
    pub fn events(&self) -> Vec<Value> {
        self.captured()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    /// Whether rendered text may carry ANSI colors
    pub fn color(&self) -> bool {
        self.color && !self.json_mode
    }

    /// JSON Lines event (JSON mode only)
    pub fn emit<T: Serialize>(&self, event_type: &str, payload: T) {
        self.write(format!("{}\n", event_line(event_type, payload)));
    }

    /// Rendered text (human mode)
    pub fn text(&self, text: &str) {
        self.write(text.to_string());
    }

    fn write(&self, text: String) {
        match &self.capture {
            Some(buf) => buf.borrow_mut().push(text),
            None => print!("{}", text),
        }
    }

    /// Error output; exits with the category's code
    pub fn error(&self, err: CliError) -> ! {
        if self.json_mode {
            self.emit("error", &err);
        } else {
            eprintln!(
                "Error [{}][{}]: {}",
                err.cat,
                err.code,
                err.message.as_deref().unwrap_or("")
            );
            if err.retryable {
                if let Some(s) = err.retry_after_s {
                    eprintln!("  Retry after: {}s", s);
                }
            }
            if !err.fix.is_empty() {
                eprintln!("  Fix: {}", err.fix.join(", "));
            }
        }
        std::process::exit(err.exit_code());
    }
}

/// Structured command failure
#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub cat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_s: Option<u32>,
    pub fix: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl CliError {
    fn new(code: &str, cat: &str, message: &str, fix: &[&str]) -> Self {
        Self {
            code: code.into(),
            cat: cat.into(),
            op: None,
            retryable: false,
            retry_after_s: None,
            fix: fix.iter().map(|f| f.to_string()).collect(),
            message: Some(message.into()),
            details: None,
        }
    }

    /// Network error
    pub fn net(code: &str, message: &str) -> Self {
        Self {
            retryable: true,
            retry_after_s: Some(5),
            ..Self::new(code, "net", message, &["check NETBOX_URL", "proxy", "wait"])
        }
    }

    /// Input error
    pub fn input(code: &str, message: &str) -> Self {
        Self::new(code, "in", message, &["param"])
    }

    /// Auth error
    pub fn auth(code: &str, message: &str) -> Self {
        Self::new(code, "auth", message, &["check NETBOX_TOKEN", "token permissions"])
    }

    /// External service error
    pub fn ext(code: &str, message: &str) -> Self {
        Self {
            retryable: true,
            retry_after_s: Some(5),
            ..Self::new(code, "ext", message, &["wait", "report"])
        }
    }

    /// System error
    pub fn sys(code: &str, message: &str) -> Self {
        Self::new(code, "sys", message, &["report"])
    }

    /// Timeout error
    pub fn timeout(code: &str, message: &str, retry_after: u32) -> Self {
        Self {
            retryable: true,
            retry_after_s: Some(retry_after),
            ..Self::new(code, "time", message, &["wait", "raise --timeout"])
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: &str) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_fix(mut self, fix: &[&str]) -> Self {
        self.fix = fix.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add details
    pub fn with_details<T: Serialize>(mut self, details: T) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    /// Get exit code based on category
    pub fn exit_code(&self) -> i32 {
        match self.cat.as_str() {
            "in" => 1,
            "auth" => 3,
            "time" => 4,
            _ => 2,
        }
    }

    /// Classify an error chain by the first known cause in it
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = format!("{:#}", err);

        for cause in err.chain() {
            if let Some(e) = cause.downcast_ref::<NetboxError>() {
                return Self::from_netbox(e, &message);
            }
            if let Some(e) = cause.downcast_ref::<PagerError>() {
                return match e {
                    PagerError::Fetch(e) => Self::from_netbox(e, &message),
                    PagerError::Prompt(_) => Self::sys("PROMPT_FAILED", &message),
                };
            }
            if let Some(e) = cause.downcast_ref::<ConfigError>() {
                let fix: &[&str] = match e {
                    ConfigError::MissingUrl => &["--url", "NETBOX_URL"],
                    ConfigError::MissingToken => &["--token", "NETBOX_TOKEN"],
                    ConfigError::InvalidTimeout => &["--timeout", "NETBOX_TIMEOUT"],
                };
                return Self::input("CONFIG", &message).with_fix(fix);
            }
            if cause.downcast_ref::<ArgError>().is_some() {
                return Self::input("BAD_ARGUMENT", &message);
            }
        }

        Self::sys("INTERNAL", &message)
    }

    fn from_netbox(err: &NetboxError, message: &str) -> Self {
        if let Some(status) = err.status() {
            let base = match status {
                401 => Self::auth("UNAUTHORIZED", message),
                403 => Self::auth("FORBIDDEN", message),
                404 => Self::input("NOT_FOUND", message),
                400 => Self::input("BAD_REQUEST", message),
                429 => Self::ext("RATE_LIMITED", message),
                _ => Self::ext("NETBOX_ERROR", message),
            };
            return base.with_details(json!({"status": status}));
        }

        match err {
            NetboxError::InvalidUrl { .. } => {
                Self::input("INVALID_URL", message).with_fix(&["--url", "NETBOX_URL"])
            }
            NetboxError::Tls(_) => {
                Self::input("TLS_CONFIG", message).with_fix(&["--ca-cert", "--insecure"])
            }
            NetboxError::Decode { url, .. } => {
                Self::ext("DECODE_FAILED", message).with_details(json!({"url": url}))
            }
            e if e.is_timeout() => Self::timeout("TIMEOUT", message, 5),
            e if e.is_connect() => Self::net("CONNECT_FAILED", message),
            _ => Self::net("REQUEST_FAILED", message),
        }
    }
}
