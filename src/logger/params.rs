//! Action parameter scrubbing.
//!
//! Values under sensitive keys are replaced before an action line is
//! serialized, and oversized strings are collapsed to their length. Keys
//! match whole and case-insensitively: `auth` hides `Auth`, not `author`.

use serde_json::{Map, Value};

use crate::config::LoggerConfig;

const REDACTED: &str = "[REDACTED]";

/// Redacts and truncates action parameters.
#[derive(Debug, Clone)]
pub struct ParamScrubber {
    /// Lower-cased key names.
    keys: Vec<String>,
    max_len: usize,
}

impl ParamScrubber {
    pub fn new<I, K>(keys: I, max_len: usize) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            max_len,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(&config.redact_keys, config.max_param_len)
    }

    /// Return a scrubbed copy of `params`.
    pub fn scrub(&self, params: &Value) -> Value {
        match params {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| {
                        let value = if self.is_sensitive(key) {
                            Value::String(REDACTED.to_string())
                        } else {
                            self.scrub(value)
                        };
                        (key.clone(), value)
                    })
                    .collect::<Map<_, _>>(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.scrub(v)).collect()),
            Value::String(s) if s.len() > self.max_len => {
                Value::String(format!("[TRUNCATED - {} bytes]", s.len()))
            }
            other => other.clone(),
        }
    }

    fn is_sensitive(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scrubber() -> ParamScrubber {
        ParamScrubber::from_config(&LoggerConfig::default())
    }

    #[test]
    fn test_redacts_nested_sensitive_keys() {
        let scrubbed = scrubber().scrub(&json!({
            "name": "alice",
            "Password": "hunter2",
            "profile": {"api_key": "abc", "city": "Oslo"},
            "sessions": [{"token": "t1"}, {"id": 2}]
        }));

        assert_eq!(scrubbed["name"], "alice");
        assert_eq!(scrubbed["Password"], REDACTED);
        assert_eq!(scrubbed["profile"]["api_key"], REDACTED);
        assert_eq!(scrubbed["profile"]["city"], "Oslo");
        assert_eq!(scrubbed["sessions"][0]["token"], REDACTED);
        assert_eq!(scrubbed["sessions"][1]["id"], 2);
    }

    #[test]
    fn test_similar_keys_pass_through() {
        let params = json!({
            "author": "bob",
            "oauth_provider": "google",
            "keyword": "rust",
            "password_hint": "pet name"
        });
        assert_eq!(scrubber().scrub(&params), params);
    }

    #[test]
    fn test_truncates_long_strings() {
        let scrubbed = ParamScrubber::new(Vec::<String>::new(), 4).scrub(&json!({
            "short": "abcd",
            "long": "abcdef"
        }));
        assert_eq!(scrubbed["short"], "abcd");
        assert_eq!(scrubbed["long"], "[TRUNCATED - 6 bytes]");
    }

    #[test]
    fn test_no_keys_keeps_everything() {
        let params = json!({"password": "x"});
        let scrubbed = ParamScrubber::new(Vec::<String>::new(), 1024).scrub(&params);
        assert_eq!(scrubbed, params);
    }
}
