use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use portfolio_core::model::{
    Article, Experience, HostedDemo, Project, SiteProfile, SkillItem, ALL_PROJECTS_TAB,
};
use portfolio_core::seed::Seed;
use portfolio_core::{Controller, GroupedController, Saved, SessionContext};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Projects,
    Experience,
    Demos,
    Articles,
    Skills,
}

/// Every section of the site, each mounted independently from the seed with
/// the same session context.
pub struct Portfolio {
    context: SessionContext,
    profile: SiteProfile,
    projects: Controller<Project>,
    experience: Controller<Experience>,
    demos: Controller<HostedDemo>,
    articles: Controller<Article>,
    skills: GroupedController<SkillItem>,
}

impl Portfolio {
    pub fn mount(seed: Seed, context: SessionContext) -> Self {
        Self {
            context,
            profile: seed.profile,
            projects: Controller::mount(seed.projects, &context),
            experience: Controller::mount(seed.experience, &context),
            demos: Controller::mount(seed.demos, &context),
            articles: Controller::mount(seed.articles, &context),
            skills: GroupedController::mount(seed.skills, &context),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    /// Render model of a section. `tab` filters projects by category.
    pub fn view(&self, section: Section, tab: Option<&str>) -> Result<Value, AppError> {
        let view = match section {
            Section::Projects => {
                serde_json::to_value(self.projects.view_tab(tab.unwrap_or(ALL_PROJECTS_TAB)))?
            }
            Section::Experience => serde_json::to_value(self.experience.view())?,
            Section::Demos => serde_json::to_value(self.demos.view())?,
            Section::Articles => serde_json::to_value(self.articles.view())?,
            Section::Skills => serde_json::to_value(self.skills.view())?,
        };
        Ok(view)
    }

    pub fn open_create(&mut self, section: Section, category: Option<&str>) -> Result<(), AppError> {
        match section {
            Section::Projects => self.projects.open_create()?,
            Section::Experience => self.experience.open_create()?,
            Section::Demos => self.demos.open_create()?,
            Section::Articles => self.articles.open_create()?,
            Section::Skills => self.skills.open_create(require_category(category)?)?,
        }
        Ok(())
    }

    pub fn open_edit(
        &mut self,
        section: Section,
        key: &str,
        category: Option<&str>,
    ) -> Result<bool, AppError> {
        let opened = match section {
            Section::Projects => self.projects.open_edit(key)?,
            Section::Experience => self.experience.open_edit(key)?,
            Section::Demos => self.demos.open_edit(key)?,
            Section::Articles => self.articles.open_edit(key)?,
            Section::Skills => self.skills.open_edit(require_category(category)?, key)?,
        };
        Ok(opened)
    }

    pub fn change_field(&mut self, section: Section, field: &str, value: String) -> Result<(), AppError> {
        match section {
            Section::Projects => self.projects.field_change(field, value)?,
            Section::Experience => self.experience.field_change(field, value)?,
            Section::Demos => self.demos.field_change(field, value)?,
            Section::Articles => self.articles.field_change(field, value)?,
            Section::Skills => self.skills.field_change(field, value)?,
        }
        Ok(())
    }

    /// Commits the open dialog and returns the submitted entry.
    pub fn submit(&mut self, section: Section) -> Result<Saved<Value>, AppError> {
        match section {
            Section::Projects => to_json(self.projects.submit()?),
            Section::Experience => to_json(self.experience.submit()?),
            Section::Demos => to_json(self.demos.submit()?),
            Section::Articles => to_json(self.articles.submit()?),
            Section::Skills => to_json(self.skills.submit()?),
        }
    }

    pub fn cancel(&mut self, section: Section) {
        match section {
            Section::Projects => self.projects.cancel(),
            Section::Experience => self.experience.cancel(),
            Section::Demos => self.demos.cancel(),
            Section::Articles => self.articles.cancel(),
            Section::Skills => self.skills.cancel(),
        }
    }

    pub fn delete(
        &mut self,
        section: Section,
        key: &str,
        category: Option<&str>,
    ) -> Result<usize, AppError> {
        let removed = match section {
            Section::Projects => self.projects.delete(key)?,
            Section::Experience => self.experience.delete(key)?,
            Section::Demos => self.demos.delete(key)?,
            Section::Articles => self.articles.delete(key)?,
            Section::Skills => self.skills.delete(require_category(category)?, key)?,
        };
        Ok(removed)
    }

    /// Writes a generated description into the open project dialog, if any.
    pub fn apply_description(&mut self, description: &str) -> Result<bool, AppError> {
        if !self.projects.session().is_open() {
            return Ok(false);
        }
        self.projects.field_change("description", description)?;
        Ok(true)
    }
}

fn to_json<E: Serialize>(saved: Saved<E>) -> Result<Saved<Value>, AppError> {
    Ok(Saved {
        entry: serde_json::to_value(saved.entry)?,
        stored: saved.stored,
    })
}

fn require_category(category: Option<&str>) -> Result<&str, AppError> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("category is required for the skills section".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{EditError, EntityShape};

    fn authoring() -> Portfolio {
        Portfolio::mount(Seed::builtin(), SessionContext::authoring())
    }

    fn cards(view: &Value) -> usize {
        view["cards"].as_array().map(Vec::len).unwrap_or(0)
    }

    #[test]
    fn sections_are_independent() {
        let mut portfolio = authoring();
        portfolio.open_create(Section::Demos, None).unwrap();
        portfolio.open_create(Section::Articles, None).unwrap();
        portfolio.cancel(Section::Demos);
        assert_eq!(
            portfolio.view(Section::Articles, None).unwrap()["dialog"]["mode"],
            "create"
        );
        assert_eq!(
            portfolio.view(Section::Demos, None).unwrap()["dialog"]["mode"],
            "closed"
        );
    }

    #[test]
    fn experience_create_lands_first() {
        let mut portfolio = authoring();
        portfolio.open_create(Section::Experience, None).unwrap();
        for (field, value) in [
            ("company", "Frontier Labs"),
            ("role", "Staff AI Engineer"),
            ("duration", "2025 - Present"),
            ("accomplishments", "Shipped agents\nScaled inference"),
        ] {
            portfolio
                .change_field(Section::Experience, field, value.to_string())
                .unwrap();
        }
        let saved = portfolio.submit(Section::Experience).unwrap();
        assert!(saved.stored);
        assert_eq!(saved.entry["accomplishments"][1], "Scaled inference");
        let view = portfolio.view(Section::Experience, None).unwrap();
        assert_eq!(view["cards"][0]["entry"]["company"], "Frontier Labs");
        assert_eq!(cards(&view), 4);
    }

    fn keys<E: EntityShape>(entries: &[E]) -> Vec<String> {
        entries.iter().map(|e| e.key().to_string()).collect()
    }

    #[test]
    fn every_builtin_entry_survives_an_unchanged_edit() {
        let seed = Seed::builtin();
        let mut portfolio = authoring();
        let flat = [
            (Section::Projects, keys(&seed.projects)),
            (Section::Experience, keys(&seed.experience)),
            (Section::Demos, keys(&seed.demos)),
            (Section::Articles, keys(&seed.articles)),
        ];
        for (section, keys) in &flat {
            let before = portfolio.view(*section, None).unwrap();
            for key in keys {
                assert!(portfolio.open_edit(*section, key, None).unwrap(), "{key}");
                let saved = portfolio.submit(*section).unwrap();
                assert!(saved.stored, "{key}");
            }
            assert_eq!(portfolio.view(*section, None).unwrap(), before, "{section:?}");
        }

        let before = portfolio.view(Section::Skills, None).unwrap();
        for group in &seed.skills {
            for item in &group.items {
                assert!(portfolio
                    .open_edit(Section::Skills, &item.name, Some(&group.label))
                    .unwrap());
                assert!(portfolio.submit(Section::Skills).unwrap().stored);
            }
        }
        assert_eq!(portfolio.view(Section::Skills, None).unwrap(), before);
    }

    #[test]
    fn project_view_lists_tabs() {
        let portfolio = authoring();
        let view = portfolio.view(Section::Projects, None).unwrap();
        assert_eq!(
            view["tabs"],
            serde_json::json!(["All", "NLP", "Computer Vision", "Multimodal", "AI Agent"])
        );
        assert_eq!(view["key_field"], "title");
        assert!(portfolio.view(Section::Demos, None).unwrap().get("tabs").is_none());
    }

    #[test]
    fn skills_need_a_category() {
        let mut portfolio = authoring();
        assert!(matches!(
            portfolio.open_create(Section::Skills, None),
            Err(AppError::InvalidRequest(_))
        ));
        assert_eq!(portfolio.delete(Section::Skills, "AWS", Some("DevOps")).unwrap(), 1);
    }

    #[test]
    fn project_tabs_filter_the_view() {
        let portfolio = authoring();
        assert_eq!(cards(&portfolio.view(Section::Projects, None).unwrap()), 6);
        assert_eq!(cards(&portfolio.view(Section::Projects, Some("All")).unwrap()), 6);
        assert_eq!(cards(&portfolio.view(Section::Projects, Some("AI Agent")).unwrap()), 2);
    }

    #[test]
    fn description_only_lands_in_an_open_project_dialog() {
        let mut portfolio = authoring();
        assert!(!portfolio.apply_description("text").unwrap());
        assert!(portfolio
            .open_edit(Section::Projects, "Customer Support Chatbot with RAG", None)
            .unwrap());
        assert!(portfolio.apply_description("A sharper pitch.").unwrap());
        let view = portfolio.view(Section::Projects, None).unwrap();
        assert_eq!(view["dialog"]["draft"]["description"], "A sharper pitch.");
    }

    #[test]
    fn read_only_portfolio_shows_no_affordances() {
        let mut portfolio = Portfolio::mount(Seed::builtin(), SessionContext::read_only());
        for section in [
            Section::Projects,
            Section::Experience,
            Section::Demos,
            Section::Articles,
            Section::Skills,
        ] {
            let view = portfolio.view(section, None).unwrap();
            let raw = view.to_string();
            assert!(!raw.contains(r#""can_add":true"#), "{section:?}");
            assert!(!raw.contains(r#""can_edit":true"#), "{section:?}");
            assert!(!raw.contains(r#""can_delete":true"#), "{section:?}");
        }
        assert!(matches!(
            portfolio.delete(Section::Demos, "News Analyzer", None),
            Err(AppError::Edit(EditError::ReadOnly { section: "demos" }))
        ));
    }
}
