//! Editable collection nested one level under category labels (skills).
//!
//! Items are indexed by category label, then by item name. Categories
//! themselves are fixed: items can be added, edited and deleted inside a
//! category but categories cannot be created or removed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine;
use crate::error::EditError;
use crate::gate::{SessionContext, SessionGate};
use crate::session::EditSession;
use crate::shape::EntityShape;
use crate::view::{Card, DialogView, GroupView, GroupedView, Saved};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group<E> {
    #[serde(rename = "category")]
    pub label: String,
    pub items: Vec<E>,
}

#[derive(Debug, Clone)]
pub struct GroupedController<E: EntityShape> {
    groups: Vec<Group<E>>,
    gate: SessionGate,
    session: EditSession<E>,
    /// Category the open dialog writes into.
    scope: Option<String>,
}

impl<E: EntityShape> GroupedController<E> {
    pub fn mount(seed: Vec<Group<E>>, context: &SessionContext) -> Self {
        let gate = SessionGate::mount(context);
        info!(
            section = E::SECTION,
            groups = seed.len(),
            entries = seed.iter().map(|g| g.items.len()).sum::<usize>(),
            authoring = gate.is_authoring(),
            "section mounted"
        );
        Self {
            groups: seed,
            gate,
            session: EditSession::Closed,
            scope: None,
        }
    }

    pub fn groups(&self) -> &[Group<E>] {
        &self.groups
    }

    pub fn items(&self, label: &str) -> Option<&[E]> {
        self.group(label).map(|g| g.items.as_slice())
    }

    pub fn session(&self) -> &EditSession<E> {
        &self.session
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn is_authoring(&self) -> bool {
        self.gate.is_authoring()
    }

    pub fn open_create(&mut self, label: &str) -> Result<(), EditError> {
        self.gate.require(E::SECTION)?;
        if self.group(label).is_none() {
            return Err(EditError::UnknownGroup(label.to_string()));
        }
        self.session.open_create()?;
        self.scope = Some(label.to_string());
        debug!(section = E::SECTION, category = label, "create dialog opened");
        Ok(())
    }

    /// Returns `false`, with the dialog still closed, when the category or
    /// item is not found.
    pub fn open_edit(&mut self, label: &str, key: &str) -> Result<bool, EditError> {
        self.gate.require(E::SECTION)?;
        if self.session.is_open() {
            return Err(EditError::SessionOpen { section: E::SECTION });
        }
        let Some(entry) = self
            .items(label)
            .and_then(|items| items.iter().find(|e| e.key() == key))
            .cloned()
        else {
            debug!(section = E::SECTION, category = label, key, "edit requested for unknown item");
            return Ok(false);
        };
        self.session.open_edit(&entry)?;
        self.scope = Some(label.to_string());
        Ok(true)
    }

    pub fn field_change(&mut self, field: &str, value: impl Into<String>) -> Result<(), EditError> {
        self.gate.require(E::SECTION)?;
        self.session.field_change(field, value)
    }

    pub fn submit(&mut self) -> Result<Saved<E>, EditError> {
        self.gate.require(E::SECTION)?;
        let commit = self.session.commit()?;
        let label = self
            .scope
            .clone()
            .ok_or(EditError::NoOpenSession { section: E::SECTION })?;
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.label == label)
            .ok_or_else(|| EditError::UnknownGroup(label.clone()))?;
        let upserted = engine::upsert(&group.items, commit.entry.clone(), commit.target.as_deref())?;
        group.items = upserted.entries;
        self.session.close();
        self.scope = None;
        if upserted.stored {
            info!(
                section = E::SECTION,
                category = %label,
                key = commit.entry.key(),
                edited = commit.target.is_some(),
                "entry saved"
            );
        } else {
            info!(
                section = E::SECTION,
                category = %label,
                key = commit.entry.key(),
                target = commit.target.as_deref(),
                "edited item no longer exists, nothing saved"
            );
        }
        Ok(Saved {
            entry: commit.entry,
            stored: upserted.stored,
        })
    }

    pub fn cancel(&mut self) {
        self.session.close();
        self.scope = None;
    }

    /// Removes every item keyed `key` from one category. An unknown category
    /// removes nothing.
    pub fn delete(&mut self, label: &str, key: &str) -> Result<usize, EditError> {
        self.gate.require(E::SECTION)?;
        let Some(group) = self.groups.iter_mut().find(|g| g.label == label) else {
            debug!(section = E::SECTION, category = label, "delete in unknown category");
            return Ok(0);
        };
        let before = group.items.len();
        group.items = engine::delete(&group.items, key);
        let removed = before - group.items.len();
        info!(section = E::SECTION, category = label, key, removed, "entry deleted");
        Ok(removed)
    }

    pub fn view(&self) -> GroupedView<E> {
        let authoring = self.gate.is_authoring();
        GroupedView {
            section: E::SECTION,
            key_field: E::KEY_FIELD,
            groups: self
                .groups
                .iter()
                .map(|g| GroupView {
                    label: g.label.clone(),
                    can_add: authoring && !self.session.is_open(),
                    cards: g.items.iter().map(|e| Card::new(e, authoring)).collect(),
                })
                .collect(),
            dialog: DialogView::of(&self.session, self.scope.as_deref()),
        }
    }

    fn group(&self, label: &str) -> Option<&Group<E>> {
        self.groups.iter().find(|g| g.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillItem;

    fn skill(name: &str) -> SkillItem {
        SkillItem {
            name: name.to_string(),
            icon: "PythonIcon".to_string(),
            description: format!("{name} things"),
        }
    }

    fn skills(context: SessionContext) -> GroupedController<SkillItem> {
        GroupedController::mount(
            vec![
                Group {
                    label: "Languages".to_string(),
                    items: vec![skill("Python"), skill("TypeScript")],
                },
                Group {
                    label: "Data".to_string(),
                    items: vec![skill("Qdrant")],
                },
            ],
            &context,
        )
    }

    #[test]
    fn create_appends_inside_the_chosen_category() {
        let mut section = skills(SessionContext::authoring());
        section.open_create("Data").unwrap();
        assert_eq!(section.session().draft().unwrap().get("icon"), "PythonIcon");
        section.field_change("name", "MongoDB").unwrap();
        section.field_change("icon", "MongoDBIcon").unwrap();
        section.field_change("description", "Documents").unwrap();
        section.submit().unwrap();

        let data = section.items("Data").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].name, "MongoDB");
        assert_eq!(section.items("Languages").unwrap().len(), 2);
        assert_eq!(section.scope(), None);
    }

    #[test]
    fn unknown_category_cannot_be_opened() {
        let mut section = skills(SessionContext::authoring());
        assert_eq!(
            section.open_create("Robotics"),
            Err(EditError::UnknownGroup("Robotics".to_string()))
        );
        assert!(!section.open_edit("Robotics", "Python").unwrap());
    }

    #[test]
    fn edit_stays_within_its_category() {
        let mut section = skills(SessionContext::authoring());
        assert!(section.open_edit("Languages", "TypeScript").unwrap());
        section.field_change("description", "Typed JS").unwrap();
        section.submit().unwrap();
        assert_eq!(section.items("Languages").unwrap()[1].description, "Typed JS");
        assert_eq!(section.items("Data").unwrap(), [skill("Qdrant")]);
    }

    #[test]
    fn same_name_allowed_in_different_categories() {
        let mut section = skills(SessionContext::authoring());
        section.open_create("Data").unwrap();
        section.field_change("name", "Python").unwrap();
        section.field_change("description", "Pandas").unwrap();
        assert!(section.submit().is_ok());
    }

    #[test]
    fn delete_is_scoped_to_the_category() {
        let mut section = skills(SessionContext::authoring());
        assert_eq!(section.delete("Data", "Python").unwrap(), 0);
        assert_eq!(section.delete("Languages", "Python").unwrap(), 1);
        assert_eq!(section.delete("Nowhere", "Python").unwrap(), 0);
        assert_eq!(section.groups().len(), 2);
    }

    #[test]
    fn item_deleted_under_open_dialog_is_not_stored() {
        let mut section = skills(SessionContext::authoring());
        assert!(section.open_edit("Data", "Qdrant").unwrap());
        assert_eq!(section.delete("Data", "Qdrant").unwrap(), 1);
        let saved = section.submit().unwrap();
        assert!(!saved.stored);
        assert!(section.items("Data").unwrap().is_empty());
        assert_eq!(section.view().key_field, "name");
    }

    #[test]
    fn read_only_view_hides_affordances() {
        let section = skills(SessionContext::read_only());
        assert!(!section.view().has_affordances());
        assert!(skills(SessionContext::authoring()).view().has_affordances());
    }
}
