//! Network URL constants for the Inkflow SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.inkflow.io/v3";
