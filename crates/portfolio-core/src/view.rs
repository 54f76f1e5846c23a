//! Render models handed to the display layer. Affordance flags are only set
//! when the section mounted in authoring mode.

use serde::Serialize;

use crate::draft::Draft;
use crate::session::{DialogMode, EditSession};
use crate::shape::EntityShape;

#[derive(Debug, Clone, Serialize)]
pub struct Card<E> {
    pub entry: E,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl<E: Clone> Card<E> {
    pub fn new(entry: &E, authoring: bool) -> Self {
        Self {
            entry: entry.clone(),
            can_edit: authoring,
            can_delete: authoring,
        }
    }
}

/// Outcome of a submit. `stored` is false when the edited entry was removed
/// while its dialog was open, so nothing was replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Saved<E> {
    pub entry: E,
    pub stored: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogView {
    pub mode: DialogMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<Draft>,
    /// Category the dialog writes into, for grouped sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl DialogView {
    pub fn of<E: EntityShape>(session: &EditSession<E>, category: Option<&str>) -> Self {
        Self {
            mode: session.mode(),
            draft: session.draft().cloned(),
            category: category.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView<E> {
    pub section: &'static str,
    /// Field whose value keys each card for edit and delete.
    pub key_field: &'static str,
    /// Category tabs, for sections that filter by them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<&'static [&'static str]>,
    pub can_add: bool,
    pub cards: Vec<Card<E>>,
    pub dialog: DialogView,
}

impl<E> SectionView<E> {
    pub fn has_affordances(&self) -> bool {
        self.can_add || self.cards.iter().any(|c| c.can_edit || c.can_delete)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupView<E> {
    pub label: String,
    pub can_add: bool,
    pub cards: Vec<Card<E>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupedView<E> {
    pub section: &'static str,
    pub key_field: &'static str,
    pub groups: Vec<GroupView<E>>,
    pub dialog: DialogView,
}

impl<E> GroupedView<E> {
    pub fn has_affordances(&self) -> bool {
        self.groups
            .iter()
            .any(|g| g.can_add || g.cards.iter().any(|c| c.can_edit || c.can_delete))
    }
}
