// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A stable identifier for a piece of the course catalog.
///
/// Any string is an id. Selection carries whatever id it was given, and lookups decide what it
/// refers to. Authored catalog data is held to a stricter shape through [`Id::authored`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), _marker: PhantomData }
    }

    /// Builds an id for catalog data: non-empty, without whitespace.
    pub fn authored(value: impl Into<String>) -> Result<Self, IdError> {
        let id = Self::new(value);
        id.check_authored()?;
        Ok(id)
    }

    pub fn check_authored(&self) -> Result<(), IdError> {
        if self.value.is_empty() {
            return Err(IdError::Empty);
        }
        if self.value.chars().any(char::is_whitespace) {
            return Err(IdError::ContainsWhitespace);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id must not contain whitespace")]
    ContainsWhitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChapterIdTag {}
pub type ChapterId = Id<ChapterIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionIdTag {}
pub type SectionId = Id<SectionIdTag>;

#[cfg(test)]
mod tests {
    use super::{Id, IdError, SectionId};

    #[test]
    fn any_string_is_an_id() {
        for value in ["", "on page seo", "not-in-the-catalog", " padded "] {
            let id: SectionId = Id::new(value);
            assert_eq!(id.as_str(), value);
        }
        let parsed: SectionId = "on page seo".parse().unwrap_or_else(|never| match never {});
        assert_eq!(parsed.as_str(), "on page seo");
    }

    #[test]
    fn authored_ids_reject_empty_and_whitespace() {
        assert_eq!(Id::<()>::authored(""), Err(IdError::Empty));
        assert_eq!(Id::<()>::authored("on page seo"), Err(IdError::ContainsWhitespace));
        let id = Id::<()>::authored("on-page-seo").expect("authored id");
        assert_eq!(id.as_str(), "on-page-seo");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = SectionId::new("evolution");
        assert_eq!(serde_json::to_string(&id).expect("json"), "\"evolution\"");
    }
}
