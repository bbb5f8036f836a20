//! Search API client
//! Fetches raw search/suggestion payloads and returns them normalized

use std::time::Duration;

use serde_json::Value;

use crate::config::SearchConfig;
use crate::search::{results_adapter, suggestions_adapter};

pub struct SearchClient {
    base_url: String,
    territory: String,
    user_agent: String,
    timeout_secs: u64,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            territory: "GB".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            timeout_secs: 30,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let mut client = Self::new(&config.base_url);
        client.territory = config.territory.clone();
        if !config.user_agent.is_empty() {
            client.user_agent = config.user_agent.clone();
        }
        client.timeout_secs = config.timeout_secs;
        client
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str, term: &str) -> String {
        format!(
            "{}/{}?term={}&territory={}",
            self.base_url,
            endpoint,
            encode_term(term),
            encode_term(&self.territory)
        )
    }

    /// Full-text search, normalized through the compound result adapter
    pub fn search(&self, term: &str) -> Result<Vec<Value>, String> {
        let payload = self.fetch_json(&self.endpoint_url("search", term))?;
        Ok(results_adapter(&payload))
    }

    /// Typeahead suggestions for `term`, decorated with the caller context
    pub fn suggest(
        &self,
        term: &str,
        section: &str,
        user_id: &str,
    ) -> Result<Vec<Value>, String> {
        let payload = self.fetch_json(&self.endpoint_url("suggest", term))?;
        Ok(suggestions_adapter(&payload, section, user_id))
    }

    fn fetch_json(&self, url: &str) -> Result<Value, String> {
        log::debug!("GET {}", url);

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(self.timeout_secs)))
            .timeout_connect(Some(Duration::from_secs(10)))
            .build()
            .new_agent();

        let mut response = agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| format!("Request failed: {}", e))?;

        if response.status() != 200 {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| format!("Read failed: {}", e))?;

        serde_json::from_str(&body).map_err(|e| format!("Invalid JSON: {}", e))
    }
}

/// Percent-encode a query term (RFC 3986 unreserved characters pass through)
pub(crate) fn encode_term(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for byte in term.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
