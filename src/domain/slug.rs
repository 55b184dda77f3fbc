// src/domain/slug.rs
//! Slug derivation shared by users and tasks.
//!
//! A slug is computed once when a record is created and is never recomputed
//! afterwards. Uniqueness is not a property of [`generate_slug`]; it is enforced
//! by the storage layer at insertion time.
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Upper bound on the byte length of a generated slug.
pub const MAX_SLUG_LEN: usize = 96;

/// Returned when the input has no alphanumeric content left after normalization.
pub const EMPTY_SLUG_PLACEHOLDER: &str = "untitled";

/// Turn arbitrary human-authored text into a lowercase, hyphen-separated ASCII token.
///
/// Non-ASCII characters are transliterated, runs of anything that is not an
/// ASCII letter or digit collapse into a single `-`, and the result is capped at
/// [`MAX_SLUG_LEN`] bytes. Empty, whitespace-only and punctuation-only input
/// yields [`EMPTY_SLUG_PLACEHOLDER`].
pub fn generate_slug(text: &str) -> String {
    let slug = truncate(::slug::slugify(text));
    if slug.is_empty() {
        EMPTY_SLUG_PLACEHOLDER.to_string()
    } else {
        slug
    }
}

fn truncate(slug: String) -> String {
    if slug.len() <= MAX_SLUG_LEN {
        return slug;
    }
    // slugify only emits ASCII, so any byte index is a char boundary.
    slug[..MAX_SLUG_LEN].trim_end_matches('-').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
