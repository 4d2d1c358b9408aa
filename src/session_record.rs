use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Session payload: an arbitrary mapping from string keys to JSON values.
/// A nested `cookie` entry may carry `maxAge` or `originalMaxAge`
/// (milliseconds), from which the storage TTL is derived.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct SessionRecord(Map<String, Value>);

impl SessionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<Option<Value>, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        Ok(self.0.insert(key.to_string(), value))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        self.0
            .get(key)
            .cloned()
            .map(serde_json::from_value)
            .transpose()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Storage TTL for this record: `cookie.maxAge` in milliseconds if it is
    /// a number, else `cookie.originalMaxAge`, else the given default.
    /// Milliseconds truncate to whole seconds.
    pub fn ttl(&self, default: Duration) -> Duration {
        self.max_age_ms()
            .map(|ms| Duration::from_secs((ms / 1000.0) as u64))
            .unwrap_or(default)
    }

    fn max_age_ms(&self) -> Option<f64> {
        let cookie = self.0.get("cookie")?;
        cookie
            .get("maxAge")
            .and_then(Value::as_f64)
            .or_else(|| cookie.get("originalMaxAge").and_then(Value::as_f64))
    }
}

impl From<Map<String, Value>> for SessionRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    struct User {
        username: String,
        password: String,
    }

    fn record_with_cookie(cookie: Value) -> SessionRecord {
        let mut record = SessionRecord::new();
        record
            .insert("cookie", &cookie)
            .expect("unable to insert cookie");
        record
    }

    #[test]
    fn insert_inserts_the_given_key_and_value() {
        let mut record = SessionRecord::new();
        let user = User {
            username: "brandon".to_string(),
            password: "hunter2".to_string(),
        };
        record.insert("user", &user).expect("unable to insert User");
        assert!(record.contains_key("user"));
    }

    #[test]
    fn get_returns_the_expected_value_for_the_given_key() {
        let mut record = SessionRecord::new();
        let user = User {
            username: "brandon".to_string(),
            password: "hunter2".to_string(),
        };
        record.insert("user", &user).expect("unable to insert User");

        let user = record
            .get::<User>("user")
            .expect("expected get \"user\" to succeed")
            .expect("expected get \"user\" to return a User");
        assert_eq!(user.username, "brandon".to_string());
        assert_eq!(user.password, "hunter2".to_string());
    }

    #[test]
    fn remove_removes_the_value_for_the_given_key() {
        let mut record = SessionRecord::new();
        record
            .insert("user_id", &"abc-123".to_string())
            .expect("unable to insert user id");

        record.remove("user_id").expect("expected a removed value");

        let user_id = record
            .get::<String>("user_id")
            .expect("expected get \"user_id\" to succeed");
        assert_eq!(user_id, None);
    }

    #[test]
    fn records_round_trip_through_json() {
        let mut record = SessionRecord::new();
        record
            .insert("user_id", &"abc-123".to_string())
            .expect("unable to insert user id");
        record
            .insert("visits", &7)
            .expect("unable to insert visits");
        record
            .insert("cookie", &json!({ "maxAge": 5000, "secure": true }))
            .expect("unable to insert cookie");

        let body = serde_json::to_string(&record).expect("unable to serialize record");
        let parsed =
            serde_json::from_str::<SessionRecord>(&body).expect("unable to deserialize record");
        assert_eq!(parsed, record);
    }

    #[test]
    fn ttl_uses_the_cookie_max_age() {
        let record = record_with_cookie(json!({ "maxAge": 5000 }));
        let ttl = record.ttl(Duration::from_secs(86400));
        assert_eq!(ttl, Duration::from_secs(5));
    }

    #[test]
    fn ttl_truncates_partial_seconds() {
        let record = record_with_cookie(json!({ "maxAge": 5999 }));
        let ttl = record.ttl(Duration::from_secs(86400));
        assert_eq!(ttl, Duration::from_secs(5));
    }

    #[test]
    fn ttl_falls_back_to_the_original_max_age() {
        let record = record_with_cookie(json!({ "originalMaxAge": 9000 }));
        let ttl = record.ttl(Duration::from_secs(86400));
        assert_eq!(ttl, Duration::from_secs(9));
    }

    #[test]
    fn ttl_prefers_max_age_over_original_max_age() {
        let record = record_with_cookie(json!({ "maxAge": 5000, "originalMaxAge": 9000 }));
        let ttl = record.ttl(Duration::from_secs(86400));
        assert_eq!(ttl, Duration::from_secs(5));
    }

    #[test]
    fn ttl_skips_a_non_numeric_max_age() {
        let record = record_with_cookie(json!({ "maxAge": null, "originalMaxAge": 9000 }));
        let ttl = record.ttl(Duration::from_secs(86400));
        assert_eq!(ttl, Duration::from_secs(9));
    }

    #[test]
    fn ttl_returns_the_default_when_no_cookie_is_present() {
        let mut record = SessionRecord::new();
        record
            .insert("user_id", &"abc-123".to_string())
            .expect("unable to insert user id");
        let ttl = record.ttl(Duration::from_secs(120));
        assert_eq!(ttl, Duration::from_secs(120));
    }
}
