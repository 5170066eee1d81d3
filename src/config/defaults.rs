//! Default values for client configuration.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default base URL for API method calls.
///
/// Method names are appended directly, so the trailing slash is required.
pub const API_URL: &str = "https://slack.com/api/";

/// Method used to exchange an OAuth code for an access token.
pub const OAUTH_ACCESS_METHOD: &str = "oauth.access";

/// Content type of URL-encoded form bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
