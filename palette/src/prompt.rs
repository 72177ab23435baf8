use crate::error::{PaletteError, Result};

pub const MIN_COLORS: usize = 5;
pub const MAX_COLORS: usize = 8;
pub const DEFAULT_COUNT: i64 = MIN_COLORS as i64;

/// A validated palette request: trimmed description and clamped color count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteRequest {
    description: String,
    count: usize,
}

impl PaletteRequest {
    pub fn new(description: &str, count: i64) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(PaletteError::InvalidInput);
        }

        Ok(Self {
            description: description.to_string(),
            count: clamp_count(count),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn system_prompt(&self) -> String {
        let count_line = format!("Exactly {} colors.", self.count);
        [
            "You are a color palette generator.",
            r##"Return only a JSON object: {"colors": ["#RRGGBB", ...]}."##,
            count_line.as_str(),
            "Order strictly: primary, secondary, accent(s), background, high-contrast text.",
            "If fewer than 5 colors, omit background and text and provide only primary, secondary, accent(s).",
            "Colors must be distinct, aesthetically cohesive, and valid 6-digit hex codes (RRGGBB).",
            "Ensure the final two colors (when present) are background then a high-contrast text color that meets WCAG AA readability on that background.",
            "No explanations, no extra fields, no trailing commas.",
        ]
        .join(" ")
    }

    pub fn user_prompt(&self) -> String {
        let subject = format!(
            "Generate a color palette that evokes: \"{}\".",
            self.description
        );
        [
            subject.as_str(),
            "Follow the exact ordering specification above.",
            "Consider cultural and natural associations, but avoid copyrighted brand palettes.",
            "Ensure all hex codes are valid 6-digit values.",
        ]
        .join(" ")
    }
}

/// Bounds any requested count to `MIN_COLORS..=MAX_COLORS`.
#[inline]
pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_COLORS as i64, MAX_COLORS as i64) as usize
}
