use crate::config::AgentConfig;
use crate::debug::{redact_body, redact_key};
use crate::debug_info;
use crate::error::{AgentError, AgentResult};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Map, Value};
use std::fs::OpenOptions;
use std::io::Write;
use std::time::Duration;

/// Sends one request to the game service and returns the raw JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> AgentResult<Value>;
}

/// Split a response envelope into its payload, failing on anything but `"error": "ok"`
pub fn unwrap_envelope(body: Value) -> AgentResult<Map<String, Value>> {
    let Value::Object(mut fields) = body else {
        return Err(AgentError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            body
        )));
    };

    match fields.remove("error") {
        Some(Value::String(status)) if status == "ok" => Ok(fields),
        Some(Value::String(message)) => Err(AgentError::Service(message)),
        Some(other) => Err(AgentError::Service(other.to_string())),
        None => Err(AgentError::MalformedResponse(
            "response has no error field".to_string(),
        )),
    }
}

/// HTTP transport with a short timeout and no retry
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_log_path: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.server.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.server.base_url.trim_end_matches('/').to_string(),
            api_log_path: config
                .logging
                .api_log
                .then(|| config.logging.api_log_path.clone()),
        })
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> AgentResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| AgentError::Config(format!("invalid URL for {}: {}", path, e)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    fn log_api_call(&self, url: &str, status: u16, body: &str) {
        let Some(path) = &self.api_log_path else {
            return;
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             URL: {url}\n\
             Response Status: {status}\n\
             Response Body: {body}\n\
             ========================================\n",
            url = redact_key(url),
            body = redact_body(body),
        );

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(log_entry.as_bytes());
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> AgentResult<Value> {
        let url = self.build_url(path, query)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let text = response.text().await?;
        self.log_api_call(url.as_str(), status.as_u16(), &text);
        debug_info!("HTTP {} on {} ({} bytes)", status.as_u16(), path, text.len());

        match serde_json::from_str(&text) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(AgentError::MalformedResponse(format!(
                "HTTP {} on {}: {}",
                status.as_u16(),
                path,
                text
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        let mut config = AgentConfig::default();
        config.server.base_url = "http://127.0.0.1:8080/".to_string();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn query_values_are_url_encoded() {
        let url = transport()
            .build_url("/player/3", &[("key", "ab+c/d==".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/player/3?key=ab%2Bc%2Fd%3D%3D");
        assert_eq!(url.query_pairs().next().unwrap().1, "ab+c/d==");
    }

    #[test]
    fn no_query_leaves_path_untouched() {
        let url = transport().build_url("/ping", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/ping");
    }

    #[test]
    fn logged_calls_hide_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("api.log");
        let mut config = AgentConfig::default();
        config.logging.api_log = true;
        config.logging.api_log_path = log_path.to_string_lossy().into_owned();

        HttpTransport::new(&config).unwrap().log_api_call(
            "http://h/player/new/alice?key=c2VjcmV0",
            200,
            r#"{"error":"ok","playerId":7,"key":"c2VjcmV0"}"#,
        );

        let logged = std::fs::read_to_string(&log_path).unwrap();
        assert!(logged.contains("playerId"));
        assert!(!logged.contains("c2VjcmV0"));
    }
}
