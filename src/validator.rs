//! Input normalization for generation requests.
//!
//! Nothing here fails: malformed or out-of-range input is coerced to the
//! nearest safe default, so downstream code only ever sees a well-formed
//! request.

use crate::models::{GenerationRequest, RawGenerationParams, Region};

/// Placeholder prefix when the caller supplies none.
pub const DEFAULT_NAME_PREFIX: &str = "HUSTLER";

/// Inclusive bounds on the per-call account count.
pub const MIN_COUNT: u8 = 1;
pub const MAX_COUNT: u8 = 15;

/// Normalizes raw query parameters into an always-valid request.
pub fn validate(params: &RawGenerationParams) -> GenerationRequest {
    let region = params
        .region
        .as_deref()
        .and_then(Region::from_code)
        .unwrap_or_default();

    let name_prefix = match params.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_NAME_PREFIX.to_string(),
    };

    let count = params.count.as_deref().map_or(MIN_COUNT, parse_count);

    GenerationRequest {
        region,
        name_prefix,
        count,
    }
}

/// Integer parse with clamping; parse failures fall back to the minimum.
fn parse_count(raw: &str) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as u8,
        Err(_) => MIN_COUNT,
    }
}
