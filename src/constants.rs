//! Shared constants used across the crate.

/// Stack Exchange API version identifier.
pub const VERSION: &str = "2.1";

/// Root URL of the Stack Exchange API, ending in [`VERSION`].
pub const ROOT: &str = "https://api.stackexchange.com/2.1";

/// Well-known value for the `site` parameter.
pub const STACK_OVERFLOW: &str = "stackoverflow";

/// User agent sent with every API request.
pub const USER_AGENT: &str = "stackexchange-client/0.1";
