//! MCP tool handlers for the contacts directory.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! Input is validated here; the aggregation service only receives well-formed data.

use crate::error::ValidationError;
use crate::models::{CreateContactData, NewPhone};
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the contacts directory.
#[derive(Clone)]
pub struct ContactsMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-directory".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact directory - list contacts with their emails and phones, create contacts, and delete contacts.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneParams {
    number: String,
    /// One of mobile, home, work, fax
    #[serde(rename = "type")]
    phone_type: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateContactParams {
    first_name: String,
    last_name: String,
    #[serde(default)]
    emails: Option<Vec<String>>,
    #[serde(default)]
    phones: Option<Vec<PhoneParams>>,
}

impl From<CreateContactParams> for CreateContactData {
    fn from(params: CreateContactParams) -> Self {
        CreateContactData {
            first_name: params.first_name,
            last_name: params.last_name,
            emails: params.emails.unwrap_or_default(),
            phones: params
                .phones
                .unwrap_or_default()
                .into_iter()
                .map(|p| NewPhone::new(p.number, p.phone_type))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: i64,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_invalid_params(e: ValidationError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl ContactsMcpServer {
    /// Create a new MCP server over the given contact service.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List every contact with its emails and phones.
    #[tool(description = "List every contact in the directory together with its email addresses and phone numbers")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: list_contacts called");

        let contacts = self.contact_service.find_all_contacts().await.map_err(|e| {
            tracing::debug!("list_contacts failed: {}", e);
            to_mcp_error(e)
        })?;

        json_result(&serde_json::json!({ "contacts": contacts }))
    }

    /// Create a contact with optional emails and phones.
    #[tool(
        description = "Create a contact with a first and last name, plus optional email addresses and phone numbers (type: mobile, home, work or fax)"
    )]
    async fn create_contact(
        &self,
        params: Parameters<CreateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let data = CreateContactData::from(params.0);

        tracing::info!("MCP Handler: create_contact called");
        tracing::debug!(
            "Parameters: emails={}, phones={}",
            data.emails.len(),
            data.phones.len()
        );

        data.validate().map_err(to_invalid_params)?;

        for phone in data.phones.iter().filter(|p| !p.phone_type.is_known()) {
            tracing::debug!("Storing phone with unrecognized type '{}'", phone.phone_type);
        }

        let contact = self.contact_service.create(data).await.map_err(|e| {
            tracing::debug!("create_contact failed: {}", e);
            to_mcp_error(e)
        })?;

        tracing::info!(
            "Contact created successfully: id={}, name={}",
            contact.id,
            contact.full_name()
        );
        json_result(&contact)
    }

    /// Delete a contact record.
    #[tool(
        description = "Delete a contact by ID. Its email addresses and phone numbers are not deleted."
    )]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact_id = params.0.contact_id;
        tracing::info!("MCP Handler: delete_contact called for id={}", contact_id);

        if contact_id <= 0 {
            return Err(to_invalid_params(ValidationError::InvalidContactId(
                contact_id,
            )));
        }

        self.contact_service
            .delete_contact_by_id(contact_id)
            .await
            .map_err(|e| {
                tracing::debug!("delete_contact failed: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({ "deleted": contact_id }))
    }
}
