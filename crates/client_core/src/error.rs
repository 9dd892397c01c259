use thiserror::Error;

/// Fatal configuration problems, raised at construction before any fetch or
/// render happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shop endpoint URL is not configured")]
    MissingEndpoint,
    #[error("storefront access token is not configured")]
    MissingAccessToken,
    #[error("shop endpoint URL '{url}' does not parse: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// One failed catalog fetch.
///
/// Recovered into the controller's error status and surfaced to the user as
/// a generic retry message; never retried automatically. Per-field problems
/// inside an otherwise well-formed response (e.g. a malformed price) are not
/// fetch errors and are recovered item-locally instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog query rejected: {}", messages.join("; "))]
    Query { messages: Vec<String> },
    #[error("catalog response malformed: {0}")]
    Malformed(String),
}
