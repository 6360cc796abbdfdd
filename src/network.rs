//! Network URL constants for the ViteX SDK.

/// Default REST API base URL for ViteX.
pub const DEFAULT_API_URL: &str = "https://api.vitex.net";
