//! Item name value object
//!
//! Map and zone names are case-insensitive keys: `MP_Crash` and `mp_crash`
//! name the same item. The original spelling is kept for display and for
//! building paths.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Case-insensitive item name
#[derive(Debug, Clone, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as originally spelled
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased lookup key
    pub fn key(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Case-insensitive comparison against a plain string
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq for ItemName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for ItemName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl PartialOrd for ItemName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ItemName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ItemName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
