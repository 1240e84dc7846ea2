//! Typed view of the descriptive fields of a photo document.
//!
//! [`ImageMetadata`] pulls the blur hash, dominant color, timestamps and
//! dimensions out of an Unsplash photo resource and can render them back as a
//! JSON fragment using the same field names, so the fragment can be fed to
//! [`ImageMetadata::from_document`] again.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{json, Value};

use crate::error::UnsplashError;

/// A timestamp from a photo document. Its textual form is RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDateTime(DateTime<FixedOffset>);

impl ImageDateTime {
    /// Parse an RFC 3339 timestamp such as `2016-05-03T11:00:28-04:00`.
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error if the text is not RFC 3339.
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(text).map(Self)
    }

    /// The textual date representation written back to documents.
    #[must_use]
    pub fn date(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }

    /// The underlying chrono value.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl fmt::Display for ImageDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.date())
    }
}

/// Pixel dimensions of a photo. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Blur hash, color, timestamps and dimensions of a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// Compact placeholder encoding (`blur_hash`).
    pub blur_hash: String,
    /// Dominant color, e.g. `#6E633A` (`color`).
    pub color: String,
    /// `created_at`.
    pub created_at: ImageDateTime,
    /// `updated_at`.
    pub updated_at: ImageDateTime,
    /// `width` and `height`.
    pub dimension: Dimension,
}

impl ImageMetadata {
    /// Extract metadata from a photo document.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::MissingField`] if a field is absent or null,
    /// and [`UnsplashError::InvalidField`] if it has the wrong type, a
    /// dimension is not a positive 32-bit integer, or a timestamp is not
    /// RFC 3339.
    pub fn from_document(document: &Value) -> Result<Self, UnsplashError> {
        Ok(Self {
            blur_hash: string_field(document, "blur_hash")?.to_string(),
            color: string_field(document, "color")?.to_string(),
            created_at: timestamp_field(document, "created_at")?,
            updated_at: timestamp_field(document, "updated_at")?,
            dimension: Dimension {
                width: dimension_field(document, "width")?,
                height: dimension_field(document, "height")?,
            },
        })
    }

    /// Render the fields back into a document fragment.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "blur_hash": self.blur_hash,
            "color": self.color,
            "created_at": self.created_at.date(),
            "updated_at": self.updated_at.date(),
            "width": self.dimension.width,
            "height": self.dimension.height,
        })
    }
}

fn field<'a>(document: &'a Value, name: &str) -> Result<&'a Value, UnsplashError> {
    match document.get(name) {
        None | Some(Value::Null) => Err(UnsplashError::missing(name)),
        Some(v) => Ok(v),
    }
}

fn string_field<'a>(document: &'a Value, name: &str) -> Result<&'a str, UnsplashError> {
    field(document, name)?
        .as_str()
        .ok_or_else(|| UnsplashError::invalid(name, "expected a string"))
}

fn timestamp_field(document: &Value, name: &str) -> Result<ImageDateTime, UnsplashError> {
    let text = string_field(document, name)?;
    ImageDateTime::parse(text)
        .map_err(|e| UnsplashError::invalid(name, format!("'{text}' is not an RFC 3339 date: {e}")))
}

fn dimension_field(document: &Value, name: &str) -> Result<u32, UnsplashError> {
    let value = field(document, name)?;
    let n = value.as_u64().ok_or_else(|| {
        UnsplashError::invalid(name, format!("expected a positive integer, got {value}"))
    })?;
    match u32::try_from(n) {
        Ok(0) => Err(UnsplashError::invalid(name, "must be greater than zero")),
        Ok(n) => Ok(n),
        Err(_) => Err(UnsplashError::invalid(name, format!("{n} is out of range"))),
    }
}
