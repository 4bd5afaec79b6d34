//! Rectangle primitives and JSON round-tripping.
//!
//! Provides a plain rectangle value type with derived measures, plus thin
//! helpers for serializing any value to JSON text and reconstructing a
//! typed value from it. The helpers are deliberate one-liners over
//! `serde_json`; the crate adds the types, not a serialization layer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A rectangle described by its side lengths.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a square with the given side length.
    #[must_use]
    pub const fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Area of the rectangle.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Perimeter of the rectangle.
    #[must_use]
    pub const fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// Serialize any value to its JSON text representation.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the value cannot be represented as
/// JSON (for example, a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Reconstruct a value of the target type from its JSON text.
///
/// The type parameter plays the role of the shape to rebuild: the same
/// text can be read back as any type whose fields match it.
///
/// # Example
/// ```
/// use quoll_geometry::{Rect, from_json, to_json};
///
/// let text = to_json(&Rect::new(10.0, 20.0))?;
/// let rect: Rect = from_json(&text)?;
/// assert!((rect.area() - 200.0).abs() < f64::EPSILON);
/// # Ok::<(), serde_json::Error>(())
/// ```
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the text is not valid JSON or does
/// not match the target type's shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
