use serde::{Deserialize, Serialize};

use super::region::Region;

/// Query parameters exactly as the front end hands them over, nothing
/// checked yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGenerationParams {
    pub region: Option<String>,
    pub name: Option<String>,
    pub count: Option<String>,
}

/// A request that already passed validation: the region is a supported code
/// and the count sits inside the service limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub region: Region,
    #[serde(rename = "name")]
    pub name_prefix: String,
    pub count: u8,
}

/// Outcome of one upstream call: the parsed JSON payload, or a classified
/// failure.
pub type GenerationResult = crate::error::Result<serde_json::Value>;
