use serde::Serialize;

use crate::draft::Draft;
use crate::error::EditError;
use crate::shape::EntityShape;

/// State of a section's edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<E> {
    Closed,
    Creating { draft: Draft },
    Editing { target: E, draft: Draft },
}

impl<E> Default for EditSession<E> {
    fn default() -> Self {
        Self::Closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogMode {
    Closed,
    Create,
    Edit,
}

/// A validated draft ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit<E> {
    pub entry: E,
    /// Key of the entry being replaced; `None` when creating.
    pub target: Option<String>,
}

impl<E: EntityShape> EditSession<E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn mode(&self) -> DialogMode {
        match self {
            Self::Closed => DialogMode::Closed,
            Self::Creating { .. } => DialogMode::Create,
            Self::Editing { .. } => DialogMode::Edit,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Closed => None,
            Self::Creating { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn target(&self) -> Option<&E> {
        match self {
            Self::Editing { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn open_create(&mut self) -> Result<(), EditError> {
        self.ensure_closed()?;
        *self = Self::Creating {
            draft: Draft::defaults::<E>(),
        };
        Ok(())
    }

    pub fn open_edit(&mut self, entry: &E) -> Result<(), EditError> {
        self.ensure_closed()?;
        *self = Self::Editing {
            target: entry.clone(),
            draft: entry.to_draft(),
        };
        Ok(())
    }

    pub fn field_change(&mut self, field: &str, value: impl Into<String>) -> Result<(), EditError> {
        match self {
            Self::Closed => Err(EditError::NoOpenSession { section: E::SECTION }),
            Self::Creating { draft } | Self::Editing { draft, .. } => draft.set(field, value),
        }
    }

    /// Checks required fields and builds the entry. The dialog stays open;
    /// the caller closes it once the engine accepts the commit.
    pub fn commit(&self) -> Result<Commit<E>, EditError> {
        let (draft, target) = match self {
            Self::Closed => return Err(EditError::NoOpenSession { section: E::SECTION }),
            Self::Creating { draft } => (draft, None),
            Self::Editing { target, draft } => (draft, Some(target.key().to_string())),
        };
        let missing = draft.missing_required::<E>();
        if !missing.is_empty() {
            return Err(EditError::MissingRequired(missing));
        }
        Ok(Commit {
            entry: E::from_draft(draft),
            target,
        })
    }

    /// Closes the dialog and drops the draft. Used for both submit and cancel.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    fn ensure_closed(&self) -> Result<(), EditError> {
        if self.is_open() {
            Err(EditError::SessionOpen { section: E::SECTION })
        } else {
            Ok(())
        }
    }
}
