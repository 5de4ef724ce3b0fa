//! Crate error taxonomy.

use thiserror::Error;

use crate::wrapper::Wrapper;

/// Failure modes of an API request.
///
/// API-reported errors are not represented here: a well-formed wrapper
/// carrying an error report decodes successfully and surfaces through
/// [`Wrapper::error`]. This enum covers the round trip itself.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP round trip failed before a response body was available.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode as a wrapper, or its `items`
    /// did not match the destination type.
    #[error("failed to decode response wrapper: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Wrapper metadata decoded before the failure.
        wrapper: Box<Wrapper>,
    },
}

impl Error {
    /// Wrapper metadata that survived a decode failure.
    ///
    /// Pagination and quota fields are still meaningful after a bad
    /// `items` payload; transport failures carry none.
    #[must_use]
    pub fn wrapper(&self) -> Option<&Wrapper> {
        match self {
            Self::Transport(_) => None,
            Self::Decode { wrapper, .. } => Some(wrapper),
        }
    }
}
