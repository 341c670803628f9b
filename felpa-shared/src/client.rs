use serde::{Serialize, Serializer};
use std::fmt;

/// Customer name attached to a saved quote. Masks its value in Debug and
/// Display output so log macros cannot leak it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    /// Surrounding whitespace is never meaningful in a name field.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl Serialize for ClientName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // API responses need the real value; masking only guards log macros
        // like tracing::info!("{:?}", quote).
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ClientName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl From<&str> for ClientName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
