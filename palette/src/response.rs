//! Validation of the model's JSON content into a palette.
//!
//! The content must be a JSON object. Its `colors` member is read through a
//! typed schema: a missing member, or one that is not an array, yields no
//! candidates. Non-string entries are skipped. Surviving candidates are
//! normalized, de-duplicated in first-seen order and truncated.

use std::collections::HashSet;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{PaletteError, Result};
use crate::hex::HexColor;

#[derive(Debug, Deserialize)]
struct PaletteSchema {
    #[serde(default)]
    colors: Candidates,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Candidates {
    List(Vec<Candidate>),
    Other(IgnoredAny),
}

impl Default for Candidates {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Candidate {
    Text(String),
    Other(IgnoredAny),
}

/// Parses model content and returns at most `limit` distinct colors.
pub fn parse_palette(content: &str, limit: usize) -> Result<Vec<HexColor>> {
    if content.is_empty() {
        return Err(PaletteError::EmptyResponse);
    }

    let object: Map<String, Value> =
        serde_json::from_str(content).map_err(PaletteError::MalformedResponse)?;
    let schema: PaletteSchema =
        serde_json::from_value(Value::Object(object)).map_err(PaletteError::MalformedResponse)?;

    let candidates = match schema.colors {
        Candidates::List(candidates) => candidates,
        Candidates::Other(_) => {
            warn!("model response `colors` is not an array; treating as empty");
            Vec::new()
        }
    };

    let texts: Vec<&str> = candidates
        .iter()
        .filter_map(|candidate| match candidate {
            Candidate::Text(text) => Some(text.as_str()),
            Candidate::Other(_) => None,
        })
        .collect();

    let skipped = candidates.len() - texts.len();
    if skipped > 0 {
        debug!(skipped, "skipped non-string color candidates");
    }

    Ok(sanitize(texts, limit))
}

/// Normalizes candidates, drops invalid ones and duplicates (keeping the first
/// occurrence), and stops once `limit` colors have been collected.
pub fn sanitize<'a, I>(candidates: I, limit: usize) -> Vec<HexColor>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut palette = Vec::with_capacity(limit);
    let mut rejected = 0usize;

    for candidate in candidates {
        if palette.len() == limit {
            break;
        }

        match HexColor::parse(candidate) {
            Some(color) => {
                if seen.insert(color.clone()) {
                    palette.push(color);
                }
            }
            None => rejected += 1,
        }
    }

    if rejected > 0 {
        debug!(rejected, "dropped invalid hex color candidates");
    }

    palette
}
