//! Content shapes for each portfolio section.

use serde::{Deserialize, Deserializer, Serialize};

use crate::draft::Draft;
use crate::shape::{Delimiter, EntityShape, FieldSpec, InsertPosition};

pub const PROJECT_CATEGORIES: &[&str] = &["NLP", "Computer Vision", "Multimodal", "AI Agent"];

/// Tab that shows every project regardless of category.
pub const ALL_PROJECTS_TAB: &str = "All";

/// Tabs above the project grid: `All`, then each category.
pub const PROJECT_TABS: &[&str] = &[
    ALL_PROJECTS_TAB,
    "NLP",
    "Computer Vision",
    "Multimodal",
    "AI Agent",
];

pub const ARTICLE_KINDS: &[&str] = &["embed", "custom"];

/// Icon names the skills renderer knows how to draw.
pub const SKILL_ICONS: &[&str] = &[
    "PythonIcon",
    "TypeScriptIcon",
    "PyTorchIcon",
    "TensorFlowIcon",
    "HuggingFaceIcon",
    "LangChainIcon",
    "LlamaIndexIcon",
    "AutoGenIcon",
    "CrewAIIcon",
    "MongoDBIcon",
    "ElasticsearchIcon",
    "QdrantIcon",
    "FastAPIIcon",
    "NextJsIcon",
    "TailwindCssIcon",
    "DockerIcon",
    "GitHubActionsIcon",
    "ReactIcon",
    "NodeJsIcon",
    "AWSIcon",
];

/// Owner details shown in the header and hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub linkedin: String,
    pub github: String,
    pub huggingface: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tech: Vec<String>,
    /// Repository URL.
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub image: Option<String>,
}

impl EntityShape for Project {
    const SECTION: &'static str = "projects";
    const KEY_FIELD: &'static str = "title";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title").required(),
        FieldSpec::choice("category", PROJECT_CATEGORIES).with_default("NLP"),
        FieldSpec::long_text("description").required(),
        FieldSpec::list("tech", Delimiter::Comma).required(),
        FieldSpec::url("github").required(),
        FieldSpec::url("demo"),
        FieldSpec::text("image"),
    ];

    fn key(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> Draft {
        Draft::defaults::<Self>()
            .with("title", &self.title)
            .with("category", &self.category)
            .with("description", &self.description)
            .with_list("tech", &self.tech)
            .with("github", &self.github)
            .with("demo", self.demo.as_deref().unwrap_or_default())
            .with("image", self.image.as_deref().unwrap_or_default())
    }

    fn from_draft(draft: &Draft) -> Self {
        Self {
            title: draft.get("title").to_string(),
            category: draft.get("category").to_string(),
            description: draft.get("description").to_string(),
            tech: draft.list("tech"),
            github: draft.get("github").to_string(),
            demo: draft.optional("demo"),
            image: draft.optional("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Free-text period label, e.g. "Jan 2021 - Present".
    pub duration: String,
    pub accomplishments: Vec<String>,
}

impl EntityShape for Experience {
    const SECTION: &'static str = "experience";
    const KEY_FIELD: &'static str = "company";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("company").required(),
        FieldSpec::text("role").required(),
        FieldSpec::text("duration").required(),
        FieldSpec::list("accomplishments", Delimiter::Newline).required(),
    ];
    const INSERT: InsertPosition = InsertPosition::Prepend;

    fn key(&self) -> &str {
        &self.company
    }

    fn to_draft(&self) -> Draft {
        Draft::defaults::<Self>()
            .with("company", &self.company)
            .with("role", &self.role)
            .with("duration", &self.duration)
            .with_list("accomplishments", &self.accomplishments)
    }

    fn from_draft(draft: &Draft) -> Self {
        Self {
            company: draft.get("company").to_string(),
            role: draft.get("role").to_string(),
            duration: draft.get("duration").to_string(),
            accomplishments: draft.list("accomplishments"),
        }
    }
}

/// An interactive demo hosted on an external model hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedDemo {
    pub name: String,
    pub task: String,
    pub description: String,
    pub link: String,
}

impl EntityShape for HostedDemo {
    const SECTION: &'static str = "demos";
    const KEY_FIELD: &'static str = "name";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name").required(),
        FieldSpec::text("task").required(),
        FieldSpec::long_text("description").required(),
        FieldSpec::url("link").required(),
    ];

    fn key(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> Draft {
        Draft::defaults::<Self>()
            .with("name", &self.name)
            .with("task", &self.task)
            .with("description", &self.description)
            .with("link", &self.link)
    }

    fn from_draft(draft: &Draft) -> Self {
        Self {
            name: draft.get("name").to_string(),
            task: draft.get("task").to_string(),
            description: draft.get("description").to_string(),
            link: draft.get("link").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    /// Hosted elsewhere and linked.
    #[serde(alias = "medium")]
    Embed,
    /// Written inline.
    #[default]
    Custom,
}

impl ArticleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embed => "embed",
            Self::Custom => "custom",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "embed" | "medium" => Some(Self::Embed),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: ArticleKind,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub content: Option<String>,
}

impl EntityShape for Article {
    const SECTION: &'static str = "articles";
    const KEY_FIELD: &'static str = "title";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("type", ARTICLE_KINDS).with_default("custom"),
        FieldSpec::text("title").required(),
        FieldSpec::long_text("description").required(),
        FieldSpec::url("link"),
        FieldSpec::long_text("content"),
    ];

    fn key(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> Draft {
        Draft::defaults::<Self>()
            .with("type", self.kind.as_str())
            .with("title", &self.title)
            .with("description", &self.description)
            .with("link", self.link.as_deref().unwrap_or_default())
            .with("content", self.content.as_deref().unwrap_or_default())
    }

    fn from_draft(draft: &Draft) -> Self {
        Self {
            title: draft.get("title").to_string(),
            description: draft.get("description").to_string(),
            kind: ArticleKind::from_label(draft.get("type")).unwrap_or_default(),
            link: draft.optional("link"),
            content: draft.optional("content"),
        }
    }

    // The link input is only shown, and only required, for embedded articles.
    fn required_fields(draft: &Draft) -> Vec<&'static str> {
        match ArticleKind::from_label(draft.get("type")) {
            Some(ArticleKind::Embed) => vec!["title", "description", "link"],
            _ => vec!["title", "description"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl EntityShape for SkillItem {
    const SECTION: &'static str = "skills";
    const KEY_FIELD: &'static str = "name";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name").required(),
        FieldSpec::choice("icon", SKILL_ICONS).with_default("PythonIcon"),
        FieldSpec::text("description").required(),
    ];

    fn key(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> Draft {
        Draft::defaults::<Self>()
            .with("name", &self.name)
            .with("icon", &self.icon)
            .with("description", &self.description)
    }

    fn from_draft(draft: &Draft) -> Self {
        Self {
            name: draft.get("name").to_string(),
            icon: draft.get("icon").to_string(),
            description: draft.get("description").to_string(),
        }
    }
}

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
