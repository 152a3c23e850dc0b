//! MCP tool handlers for the portal search server.
//!
//! Tools are registered through the rmcp SDK's tool_router pattern and
//! delegate to the search and onboarding services.

use crate::onboarding::OnboardingStatus;
use crate::services::{OnboardingService, SearchResponse, SearchService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing portal search and onboarding tools.
#[derive(Clone)]
pub struct PortalSearchServer {
    search_service: Arc<dyn SearchService>,
    onboarding_service: Arc<dyn OnboardingService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for PortalSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "care-portal-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a patient care portal - searches appointments, messages, caregivers, health records and payments, and tracks registration progress.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchPortalParams {
    patient_id: String,
    query: String,
    /// Maximum results; zero or negative returns nothing
    #[serde(default)]
    limit: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PatientParams {
    patient_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CompleteStepParams {
    patient_id: String,
    /// One of: plan, bio-data, medical-history, appointment
    step: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Clamp a caller-supplied limit; non-positive limits become zero.
fn normalize_limit(limit: Option<i64>) -> Option<usize> {
    limit.map(|n| usize::try_from(n).unwrap_or(0))
}

fn search_payload(response: &SearchResponse) -> Value {
    json!({
        "query": response.query,
        "result_count": response.result_count,
        "from_cache": response.from_cache,
        "results": response.results,
    })
}

fn status_payload(patient_id: &str, status: &OnboardingStatus) -> Value {
    json!({
        "patient_id": patient_id,
        "current_step": status.current_step,
        "completed_steps": status.completed_steps,
        "accessible_steps": status.accessible_steps,
        "finished": status.finished,
    })
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

#[tool_router]
impl PortalSearchServer {
    pub fn new(
        search_service: Arc<dyn SearchService>,
        onboarding_service: Arc<dyn OnboardingService>,
    ) -> Self {
        Self {
            search_service,
            onboarding_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Search everything a patient can see in the portal.
    #[tool(
        description = "Search a patient's appointments, messages, caregivers, health trackers, health reports, health notes, payment notifications and portal pages. Returns results ranked by match score, each with a url to open."
    )]
    async fn search_portal(
        &self,
        params: Parameters<SearchPortalParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .search_service
            .search(&params.patient_id, &params.query, normalize_limit(params.limit))
            .await
            .map_err(to_mcp_error)?;

        json_result(&search_payload(&response))
    }

    /// List a patient's recent searches.
    #[tool(description = "List a patient's most recent search queries, newest first")]
    async fn get_recent_searches(
        &self,
        params: Parameters<PatientParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let queries = self
            .search_service
            .recent_searches(&params.patient_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&json!({
            "patient_id": params.patient_id,
            "recent_searches": queries,
        }))
    }

    #[tool(description = "Clear a patient's recent search history")]
    async fn clear_recent_searches(
        &self,
        params: Parameters<PatientParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.search_service
            .clear_recent_searches(&params.patient_id)
            .await
            .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Recent searches cleared for patient {}",
            params.patient_id.trim()
        ))]))
    }

    /// Drop cached records so the next search reloads them.
    #[tool(
        description = "Discard a patient's cached records so the next search reloads them from the record source"
    )]
    async fn refresh_records(
        &self,
        params: Parameters<PatientParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let was_cached = self
            .search_service
            .invalidate(&params.patient_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&json!({
            "patient_id": params.patient_id,
            "was_cached": was_cached,
        }))
    }

    /// Show registration progress.
    #[tool(
        description = "Get a patient's registration progress: the current step, completed steps and which steps are accessible"
    )]
    async fn get_onboarding_status(
        &self,
        params: Parameters<PatientParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let status = self
            .onboarding_service
            .status(&params.patient_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&status_payload(&params.patient_id, &status))
    }

    /// Complete one registration step.
    #[tool(
        description = "Mark a registration step (plan, bio-data, medical-history, appointment) as completed. Fails if an earlier step is still incomplete."
    )]
    async fn complete_onboarding_step(
        &self,
        params: Parameters<CompleteStepParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let status = self
            .onboarding_service
            .complete_step(&params.patient_id, &params.step)
            .await
            .map_err(to_mcp_error)?;

        json_result(&status_payload(&params.patient_id, &status))
    }

    #[tool(description = "Reset a patient's registration progress to the first step")]
    async fn reset_onboarding(
        &self,
        params: Parameters<PatientParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.onboarding_service
            .reset(&params.patient_id)
            .await
            .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Onboarding reset for patient {}",
            params.patient_id.trim()
        ))]))
    }
}
