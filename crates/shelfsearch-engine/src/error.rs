use thiserror::Error;

/// Errors raised by snapshot collaborators ([`crate::CatalogSource`]
/// implementations).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("snapshot fetch failed for {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    #[error("snapshot payload malformed for {what}: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Terminal errors surfaced to search callers.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Either snapshot fetch failed. The query produces no partial results
    /// and the display text is generic enough to show to end users; the
    /// underlying cause stays on the source chain for diagnostics.
    #[error("search failed, please try again")]
    DataAccess(#[from] SourceError),
}
