//! Hex color codes as returned to callers. Values are always `#RRGGBB` with
//! uppercase digits so they can be compared and de-duplicated as plain strings.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Normalizes a candidate produced by the model.
    ///
    /// Surrounding whitespace and one leading `#` are ignored. Anything that is
    /// not exactly six ASCII hex digits afterwards is rejected.
    pub fn parse(candidate: &str) -> Option<Self> {
        let trimmed = candidate.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }

        let mut normalized = String::with_capacity(7);
        normalized.push('#');
        normalized.push_str(&digits.to_ascii_uppercase());
        Some(Self(normalized))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Returns true for strings of the form `#RRGGBB` with uppercase digits.
pub fn is_normalized(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .bytes()
            .all(|byte| byte.is_ascii_digit() || (b'A'..=b'F').contains(&byte))
}
