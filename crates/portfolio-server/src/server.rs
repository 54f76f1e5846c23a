use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{info, warn};

use portfolio_core::EditError;

use crate::auth::AuthFlag;
use crate::describe::{DescriptionGenerator, DescriptionRequest};
use crate::portfolio::{Portfolio, Section};
use crate::resume::{ResumeRef, ResumeStore};

#[derive(Clone)]
pub struct PortfolioServer {
    portfolio: Arc<RwLock<Portfolio>>,
    describer: Arc<DescriptionGenerator>,
    resume: Arc<ResumeStore>,
    auth: AuthFlag,
    tool_router: ToolRouter<PortfolioServer>,
}

impl PortfolioServer {
    pub fn new(
        portfolio: Portfolio,
        describer: Arc<DescriptionGenerator>,
        resume: Arc<ResumeStore>,
        auth: AuthFlag,
    ) -> Self {
        Self {
            portfolio: Arc::new(RwLock::new(portfolio)),
            describer,
            resume,
            auth,
            tool_router: Self::tool_router(),
        }
    }

    async fn section_view(&self, section: Section, tab: Option<&str>) -> Result<SectionResponse, String> {
        let view = self
            .portfolio
            .read()
            .await
            .view(section, tab)
            .map_err(|e| e.to_string())?;
        Ok(SectionResponse { section, view })
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ViewSectionParams {
    section: Section,
    /// Project category tab; "All" or omitted shows every project.
    tab: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct OpenCreateParams {
    section: Section,
    /// Skill category to add into. Required for `skills`.
    category: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EntryParams {
    section: Section,
    /// Key of the entry: title, company, name or skill name.
    key: String,
    /// Skill category holding the entry. Required for `skills`.
    category: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ChangeFieldParams {
    section: Section,
    field: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SectionParams {
    section: Section,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UploadResumeParams {
    file_name: String,
    content_type: String,
    /// Where the uploaded file can be fetched from.
    location: String,
}

#[derive(Debug, Serialize, JsonSchema)]
struct SectionResponse {
    section: Section,
    view: Value,
}

#[derive(Debug, Serialize, JsonSchema)]
struct OpenedResponse {
    opened: bool,
    view: Value,
}

#[derive(Debug, Serialize, JsonSchema)]
struct SavedResponse {
    section: Section,
    entry: Value,
    /// False when the edited entry had been deleted, so nothing was stored.
    stored: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
struct DeletedResponse {
    section: Section,
    removed: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
struct DescriptionResponse {
    description: String,
    /// Whether the text was written into an open project dialog.
    applied: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
struct ProfileResponse {
    authoring: bool,
    profile: Value,
}

#[derive(Debug, Serialize, JsonSchema)]
struct OkResponse {
    ok: bool,
}

#[tool_router]
impl PortfolioServer {
    #[tool(description = "Render a section: its cards, whether add/edit/delete controls are shown, and the dialog state. For projects, pass a category tab to filter.")]
    async fn view_section(
        &self,
        Parameters(params): Parameters<ViewSectionParams>,
    ) -> Result<Json<SectionResponse>, String> {
        let response = self.section_view(params.section, params.tab.as_deref()).await?;
        Ok(Json(response))
    }

    #[tool(description = "Open the add dialog for a section with a default draft. Skills need the category to add into.")]
    async fn open_create(
        &self,
        Parameters(params): Parameters<OpenCreateParams>,
    ) -> Result<Json<SectionResponse>, String> {
        self.portfolio
            .write()
            .await
            .open_create(params.section, params.category.as_deref())
            .map_err(|e| e.to_string())?;
        Ok(Json(self.section_view(params.section, None).await?))
    }

    #[tool(description = "Open the edit dialog for an existing entry, hydrating the draft from it. Returns opened=false if no entry has that key.")]
    async fn open_edit(
        &self,
        Parameters(params): Parameters<EntryParams>,
    ) -> Result<Json<OpenedResponse>, String> {
        let mut portfolio = self.portfolio.write().await;
        let opened = portfolio
            .open_edit(params.section, &params.key, params.category.as_deref())
            .map_err(|e| e.to_string())?;
        let view = portfolio.view(params.section, None).map_err(|e| e.to_string())?;
        Ok(Json(OpenedResponse { opened, view }))
    }

    #[tool(description = "Set one field of the open draft. List fields take the raw delimited text (comma for tech, newline for accomplishments).")]
    async fn change_field(
        &self,
        Parameters(params): Parameters<ChangeFieldParams>,
    ) -> Result<Json<SectionResponse>, String> {
        self.portfolio
            .write()
            .await
            .change_field(params.section, &params.field, params.value)
            .map_err(|e| e.to_string())?;
        Ok(Json(self.section_view(params.section, None).await?))
    }

    #[tool(description = "Save the open draft: insert a new entry or replace the edited one, then close the dialog. Missing required fields keep the dialog open.")]
    async fn submit_draft(
        &self,
        Parameters(params): Parameters<SectionParams>,
    ) -> Result<Json<SavedResponse>, String> {
        let saved = self
            .portfolio
            .write()
            .await
            .submit(params.section)
            .map_err(|e| e.to_string())?;
        Ok(Json(SavedResponse {
            section: params.section,
            entry: saved.entry,
            stored: saved.stored,
        }))
    }

    #[tool(description = "Close the dialog and discard the draft.")]
    async fn cancel_draft(
        &self,
        Parameters(params): Parameters<SectionParams>,
    ) -> Result<Json<SectionResponse>, String> {
        self.portfolio.write().await.cancel(params.section);
        Ok(Json(self.section_view(params.section, None).await?))
    }

    #[tool(description = "Remove every entry whose key matches. Skills need the category holding the entry.")]
    async fn delete_entry(
        &self,
        Parameters(params): Parameters<EntryParams>,
    ) -> Result<Json<DeletedResponse>, String> {
        let removed = self
            .portfolio
            .write()
            .await
            .delete(params.section, &params.key, params.category.as_deref())
            .map_err(|e| e.to_string())?;
        Ok(Json(DeletedResponse {
            section: params.section,
            removed,
        }))
    }

    #[tool(description = "Generate a short project description from title, category, tech and keywords. The text is written into the open project dialog, if any.")]
    async fn generate_project_description(
        &self,
        Parameters(request): Parameters<DescriptionRequest>,
    ) -> Result<Json<DescriptionResponse>, String> {
        if !self.portfolio.read().await.context().is_authoring() {
            return Err(EditError::ReadOnly { section: "projects" }.to_string());
        }
        let description = self.describer.generate(&request).await.map_err(|e| {
            warn!(error = %e, "description generation failed");
            e.to_string()
        })?;
        let applied = self
            .portfolio
            .write()
            .await
            .apply_description(&description)
            .map_err(|e| e.to_string())?;
        Ok(Json(DescriptionResponse {
            description,
            applied,
        }))
    }

    #[tool(description = "Get the current resume reference, falling back to the bundled default.")]
    async fn get_resume(&self) -> Result<Json<ResumeRef>, String> {
        Ok(Json(self.resume.current().await))
    }

    #[tool(description = "Record a newly uploaded resume. Only application/pdf is accepted, and only while authoring.")]
    async fn upload_resume(
        &self,
        Parameters(params): Parameters<UploadResumeParams>,
    ) -> Result<Json<ResumeRef>, String> {
        let context = *self.portfolio.read().await.context();
        let resume = self
            .resume
            .upload(&context, &params.file_name, &params.content_type, &params.location)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(resume))
    }

    #[tool(description = "Get the site header data and whether this session is authoring.")]
    async fn get_profile(&self) -> Result<Json<ProfileResponse>, String> {
        let portfolio = self.portfolio.read().await;
        let profile = serde_json::to_value(portfolio.profile()).map_err(|e| e.to_string())?;
        Ok(Json(ProfileResponse {
            authoring: portfolio.context().is_authoring(),
            profile,
        }))
    }

    #[tool(description = "Clear the stored login flag. Takes effect on the next start.")]
    async fn sign_out(&self) -> Result<Json<OkResponse>, String> {
        let ok = self.auth.clear().await;
        info!(cleared = ok, "sign out requested");
        Ok(Json(OkResponse { ok }))
    }
}

#[tool_handler]
impl ServerHandler for PortfolioServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "portfolio-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Portfolio collection editor. Use view_section to render projects, experience, demos, \
articles or skills. While authoring, open_create/open_edit open a dialog, change_field edits the \
draft, and submit_draft or cancel_draft close it; delete_entry removes entries. Skills are addressed \
by category. generate_project_description fills the open project dialog."
                    .to_string(),
            ),
        }
    }
}
