use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::extractor::{Diagnostics, ExtractedProfile};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExtractPageQuery {
    /// Legacy page identifier, e.g. `jen`.
    pub slug: Option<String>,
}

impl ExtractPageQuery {
    pub fn validate(&self) -> Result<&str, String> {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => Ok(slug),
            _ => Err("Slug parameter is required".to_string()),
        }
    }
}

/// Successful extraction. Partial data still counts as success.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractPageResponse {
    pub success: bool,
    pub exists: bool,
    pub data: ExtractedProfile,
    pub debug: Diagnostics,
}

impl ExtractPageResponse {
    pub fn new(data: ExtractedProfile, debug: Diagnostics) -> Self {
        Self {
            success: true,
            exists: true,
            data,
            debug,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
}

impl ExtractErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            exists: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            error: "Page file not found".to_string(),
            exists: Some(false),
        }
    }
}
