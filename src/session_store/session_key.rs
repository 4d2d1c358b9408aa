use std::fmt::{Display, Formatter};

use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

/// Opaque session identifier. Middleware supplies its own; `generate` is a
/// convenience for callers that need one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn generate() -> Self {
        let value = std::iter::repeat(())
            .map(|()| OsRng.sample(Alphanumeric))
            .take(64)
            .collect::<Vec<_>>();
        let key = String::from_utf8(value).expect("alphanumeric sample is valid UTF-8");
        Self(key)
    }
}

impl Display for SessionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Default for SessionKey {
    fn default() -> Self {
        Self::generate()
    }
}
