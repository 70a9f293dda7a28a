//! Client library for a guest account generation service.
//!
//! The crate normalizes raw request parameters into an always-valid request,
//! calls the remote generation API with a bounded retry budget, and
//! classifies failures into stable, user-presentable categories.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod upstream;
pub mod validator;

pub use config::{Config, UpstreamConfig, DEFAULT_API_URL};
pub use error::{GeneratorError, Result};
pub use models::{GenerationRequest, GenerationResult, RawGenerationParams, Region};
pub use upstream::{render_outcome, GuestClient, RetryPolicy};
pub use validator::validate;
