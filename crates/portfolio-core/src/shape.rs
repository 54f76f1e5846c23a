//! Entity-shape descriptors.
//!
//! A section is configured by one [`EntityShape`] impl: the key field, the
//! ordered field list with defaults, which fields are lists, and where new
//! entries are inserted.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::draft::Draft;

/// Separator used when a list field is edited as a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Newline,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Newline => '\n',
        }
    }

    /// Separator used to flatten a list back into its display form.
    pub fn joiner(self) -> &'static str {
        match self {
            Self::Comma => ", ",
            Self::Newline => "\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Url,
    List(Delimiter),
    /// Value picked from a selector; anything outside the set is refused.
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: "",
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn long_text(name: &'static str) -> Self {
        Self::new(name, FieldKind::LongText)
    }

    pub const fn url(name: &'static str) -> Self {
        Self::new(name, FieldKind::Url)
    }

    pub const fn list(name: &'static str, delimiter: Delimiter) -> Self {
        Self::new(name, FieldKind::List(delimiter))
    }

    pub const fn choice(name: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Choice(options))
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    pub fn delimiter(&self) -> Option<Delimiter> {
        match self.kind {
            FieldKind::List(delimiter) => Some(delimiter),
            _ => None,
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        match self.kind {
            FieldKind::Choice(options) => options.contains(&value),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Append,
    Prepend,
}

/// Per-section configuration of the editable collection.
pub trait EntityShape: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Section name used in logs and error messages.
    const SECTION: &'static str;
    /// Field whose value identifies an entry on screen and in edit/delete.
    const KEY_FIELD: &'static str;
    const FIELDS: &'static [FieldSpec];
    const INSERT: InsertPosition = InsertPosition::Append;

    fn key(&self) -> &str;

    /// Copies every field into a draft, flattening list fields.
    fn to_draft(&self) -> Draft;

    /// Rebuilds an entry from a draft, splitting list fields.
    fn from_draft(draft: &Draft) -> Self;

    /// Fields that must be non-empty for the dialog to submit.
    fn required_fields(_draft: &Draft) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}
