use tracing::{debug, info};

use crate::engine;
use crate::error::EditError;
use crate::gate::{SessionContext, SessionGate};
use crate::model::{Project, ALL_PROJECTS_TAB, PROJECT_TABS};
use crate::session::EditSession;
use crate::shape::EntityShape;
use crate::view::{Card, DialogView, Saved, SectionView};

/// Editable collection for one flat section.
///
/// Owns the section's entries, its copy of the authoring gate and the edit
/// dialog state. Every mutating call checks the gate first.
#[derive(Debug, Clone)]
pub struct Controller<E: EntityShape> {
    entries: Vec<E>,
    gate: SessionGate,
    session: EditSession<E>,
}

impl<E: EntityShape> Controller<E> {
    pub fn mount(seed: Vec<E>, context: &SessionContext) -> Self {
        let gate = SessionGate::mount(context);
        info!(
            section = E::SECTION,
            entries = seed.len(),
            authoring = gate.is_authoring(),
            "section mounted"
        );
        Self {
            entries: seed,
            gate,
            session: EditSession::Closed,
        }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn session(&self) -> &EditSession<E> {
        &self.session
    }

    pub fn is_authoring(&self) -> bool {
        self.gate.is_authoring()
    }

    pub fn find(&self, key: &str) -> Option<&E> {
        self.entries.iter().find(|e| e.key() == key)
    }

    pub fn open_create(&mut self) -> Result<(), EditError> {
        self.gate.require(E::SECTION)?;
        self.session.open_create()?;
        debug!(section = E::SECTION, "create dialog opened");
        Ok(())
    }

    /// Opens the edit dialog on the entry keyed `key`. Returns `false`, with
    /// the dialog still closed, when no entry has that key.
    pub fn open_edit(&mut self, key: &str) -> Result<bool, EditError> {
        self.gate.require(E::SECTION)?;
        if self.session.is_open() {
            return Err(EditError::SessionOpen { section: E::SECTION });
        }
        let Some(entry) = self.find(key).cloned() else {
            debug!(section = E::SECTION, key, "edit requested for unknown key");
            return Ok(false);
        };
        self.session.open_edit(&entry)?;
        debug!(section = E::SECTION, key, "edit dialog opened");
        Ok(true)
    }

    pub fn field_change(&mut self, field: &str, value: impl Into<String>) -> Result<(), EditError> {
        self.gate.require(E::SECTION)?;
        self.session.field_change(field, value)
    }

    /// Commits the open dialog through the engine and closes it. On any error
    /// the dialog stays open with the draft untouched.
    pub fn submit(&mut self) -> Result<Saved<E>, EditError> {
        self.gate.require(E::SECTION)?;
        let commit = self.session.commit()?;
        let upserted = engine::upsert(&self.entries, commit.entry.clone(), commit.target.as_deref())?;
        self.entries = upserted.entries;
        self.session.close();
        if upserted.stored {
            info!(
                section = E::SECTION,
                key = commit.entry.key(),
                edited = commit.target.is_some(),
                entries = self.entries.len(),
                "entry saved"
            );
        } else {
            info!(
                section = E::SECTION,
                key = commit.entry.key(),
                target = commit.target.as_deref(),
                "edited entry no longer exists, nothing saved"
            );
        }
        Ok(Saved {
            entry: commit.entry,
            stored: upserted.stored,
        })
    }

    /// Dismisses the dialog. Always succeeds and never touches the entries.
    pub fn cancel(&mut self) {
        if self.session.is_open() {
            debug!(section = E::SECTION, "dialog dismissed");
        }
        self.session.close();
    }

    /// Removes every entry keyed `key` and reports how many went.
    pub fn delete(&mut self, key: &str) -> Result<usize, EditError> {
        self.gate.require(E::SECTION)?;
        let before = self.entries.len();
        self.entries = engine::delete(&self.entries, key);
        let removed = before - self.entries.len();
        info!(section = E::SECTION, key, removed, "entry deleted");
        Ok(removed)
    }

    pub fn view(&self) -> SectionView<E> {
        self.view_of(self.entries.iter())
    }

    fn view_of<'a>(&self, entries: impl Iterator<Item = &'a E>) -> SectionView<E> {
        let authoring = self.gate.is_authoring();
        SectionView {
            section: E::SECTION,
            key_field: E::KEY_FIELD,
            tabs: None,
            can_add: authoring && !self.session.is_open(),
            cards: entries.map(|e| Card::new(e, authoring)).collect(),
            dialog: DialogView::of(&self.session, None),
        }
    }
}

impl Controller<Project> {
    /// Projects shown under a category tab. `All` shows everything; an
    /// unknown tab shows nothing.
    pub fn filter(&self, tab: &str) -> Vec<&Project> {
        self.entries
            .iter()
            .filter(|p| tab == ALL_PROJECTS_TAB || p.category == tab)
            .collect()
    }

    pub fn view_tab(&self, tab: &str) -> SectionView<Project> {
        SectionView {
            tabs: Some(PROJECT_TABS),
            ..self.view_of(self.filter(tab).into_iter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Experience, HostedDemo};
    use crate::session::DialogMode;

    fn project(title: &str, category: &str, tech: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            category: category.to_string(),
            description: format!("{title} description"),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            github: format!("https://github.com/me/{title}"),
            demo: None,
            image: None,
        }
    }

    fn authoring<E: EntityShape>(seed: Vec<E>) -> Controller<E> {
        Controller::mount(seed, &SessionContext::authoring())
    }

    fn sorted<E: EntityShape>(entries: &[E]) -> Vec<String> {
        let mut out: Vec<String> = entries
            .iter()
            .map(|e| serde_json::to_string(e).unwrap())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn edit_then_submit_unchanged_keeps_entries() {
        let mut section = authoring(vec![
            project("A", "NLP", &["Python", "LangChain"]),
            project("B", "AI Agent", &["CrewAI"]),
        ]);
        let before = sorted(section.entries());
        for key in ["A", "B"] {
            assert!(section.open_edit(key).unwrap());
            section.submit().unwrap();
        }
        assert_eq!(sorted(section.entries()), before);
    }

    #[test]
    fn create_appends_exactly_one() {
        let mut section = authoring(vec![project("A", "NLP", &["Py"])]);
        section.open_create().unwrap();
        section.field_change("title", "New").unwrap();
        section.field_change("description", "Fresh").unwrap();
        section.field_change("tech", "Rust,  Tokio ,").unwrap();
        section.field_change("github", "https://github.com/me/new").unwrap();
        section.submit().unwrap();

        assert_eq!(section.entries().len(), 2);
        let last = section.entries().last().unwrap();
        assert_eq!(last.title, "New");
        assert_eq!(last.category, "NLP");
        assert_eq!(last.tech, ["Rust", "Tokio"]);
        assert_eq!(section.session().mode(), DialogMode::Closed);
    }

    #[test]
    fn experience_create_prepends() {
        let mut section = authoring(vec![Experience {
            company: "Old".to_string(),
            role: "Dev".to_string(),
            duration: "2019".to_string(),
            accomplishments: vec!["Things".to_string()],
        }]);
        section.open_create().unwrap();
        section.field_change("company", "New").unwrap();
        section.field_change("role", "Lead").unwrap();
        section.field_change("duration", "2024 - Present").unwrap();
        section
            .field_change("accomplishments", "Built it\n\nShipped it, twice\n")
            .unwrap();
        section.submit().unwrap();

        let first = &section.entries()[0];
        assert_eq!(first.company, "New");
        assert_eq!(first.accomplishments, ["Built it", "Shipped it, twice"]);
        assert_eq!(section.entries()[1].company, "Old");
    }

    #[test]
    fn editing_tech_list_splits_on_submit() {
        let mut section = authoring(vec![project("X", "NLP", &["Py"])]);
        section.open_edit("X").unwrap();
        assert_eq!(section.session().draft().unwrap().get("tech"), "Py");
        section.field_change("tech", "Py, Go").unwrap();
        section.submit().unwrap();
        assert_eq!(section.entries(), [project("X", "NLP", &["Py", "Go"])]);
    }

    #[test]
    fn delete_removes_the_only_match() {
        let mut section = authoring(vec![
            project("A", "NLP", &[]),
            project("B", "NLP", &[]),
        ]);
        assert_eq!(section.delete("A").unwrap(), 1);
        assert_eq!(section.entries().len(), 1);
        assert!(section.find("A").is_none());
        assert_eq!(section.delete("A").unwrap(), 0);
    }

    #[test]
    fn cancel_leaves_entries_untouched() {
        let seed = vec![project("A", "NLP", &["Py"])];
        let mut section = authoring(seed.clone());
        section.open_edit("A").unwrap();
        section.field_change("title", "Changed").unwrap();
        section.field_change("tech", "").unwrap();
        section.cancel();
        assert_eq!(section.entries(), seed.as_slice());
        assert!(!section.session().is_open());
        section.cancel();
    }

    #[test]
    fn open_edit_on_unknown_key_is_a_no_op() {
        let mut section = authoring(vec![project("A", "NLP", &[])]);
        assert!(!section.open_edit("missing").unwrap());
        assert!(!section.session().is_open());
    }

    #[test]
    fn duplicate_key_keeps_dialog_open() {
        let mut section = authoring(vec![
            project("A", "NLP", &["Py"]),
            project("B", "NLP", &["Py"]),
        ]);
        section.open_edit("B").unwrap();
        section.field_change("title", "A").unwrap();
        assert!(matches!(section.submit(), Err(EditError::Engine(_))));
        assert_eq!(section.session().draft().unwrap().get("title"), "A");
        assert_eq!(section.entries()[1].title, "B");

        section.field_change("title", "C").unwrap();
        section.submit().unwrap();
        assert_eq!(section.entries()[1].title, "C");
    }

    #[test]
    fn read_only_section_refuses_every_mutation() {
        let seed = vec![project("A", "NLP", &[])];
        let mut section = Controller::mount(seed.clone(), &SessionContext::read_only());
        let read_only = Err(EditError::ReadOnly { section: "projects" });
        assert_eq!(section.open_create(), read_only);
        assert_eq!(section.open_edit("A").map(|_| ()), read_only);
        assert_eq!(section.delete("A").map(|_| ()), read_only);
        assert_eq!(section.entries(), seed.as_slice());
    }

    #[test]
    fn read_only_view_has_no_affordances() {
        let demos = Controller::mount(
            vec![HostedDemo {
                name: "n".to_string(),
                task: "t".to_string(),
                description: "d".to_string(),
                link: "l".to_string(),
            }],
            &SessionContext::read_only(),
        );
        assert!(!demos.view().has_affordances());

        let articles = authoring::<Article>(vec![]);
        let view = articles.view();
        assert!(view.can_add);
        assert!(view.has_affordances());
    }

    #[test]
    fn add_is_hidden_while_dialog_is_open() {
        let mut section = authoring(vec![project("A", "NLP", &[])]);
        section.open_create().unwrap();
        let view = section.view();
        assert!(!view.can_add);
        assert_eq!(view.dialog.mode, DialogMode::Create);
        assert!(view.dialog.draft.is_some());
    }

    #[test]
    fn tabs_filter_by_category() {
        let section = authoring(vec![
            project("A", "NLP", &[]),
            project("B", "Computer Vision", &[]),
            project("C", "NLP", &[]),
        ]);
        assert_eq!(section.filter("All").len(), 3);
        let nlp: Vec<_> = section.filter("NLP").iter().map(|p| p.title.as_str()).collect();
        assert_eq!(nlp, ["A", "C"]);
        assert!(section.view_tab("Robotics").cards.is_empty());
    }

    #[test]
    fn project_views_publish_tabs_and_key_field() {
        let section = authoring(vec![project("A", "NLP", &[])]);
        let view = section.view_tab(ALL_PROJECTS_TAB);
        assert_eq!(view.tabs, Some(PROJECT_TABS));
        assert_eq!(view.key_field, "title");
        assert!(section.view().tabs.is_none());

        let raw = serde_json::to_value(&view).unwrap();
        assert_eq!(raw["tabs"][0], "All");
        assert_eq!(raw["key_field"], "title");
    }

    #[test]
    fn submit_after_target_deleted_reports_nothing_stored() {
        let mut section = authoring(vec![
            project("A", "NLP", &[]),
            project("B", "NLP", &[]),
        ]);
        section.open_edit("A").unwrap();
        section.field_change("description", "Rewritten").unwrap();
        assert_eq!(section.delete("A").unwrap(), 1);

        let saved = section.submit().unwrap();
        assert!(!saved.stored);
        assert_eq!(saved.entry.description, "Rewritten");
        assert_eq!(section.entries(), [project("B", "NLP", &[])]);
        assert!(!section.session().is_open());
    }

    #[test]
    fn edit_submit_reports_stored() {
        let mut section = authoring(vec![project("A", "NLP", &["Py"])]);
        section.open_edit("A").unwrap();
        let saved = section.submit().unwrap();
        assert!(saved.stored);
        assert_eq!(saved.entry, project("A", "NLP", &["Py"]));
    }
}
