use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {url} ({context})")]
    NetworkRequest {
        url: String,
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {url} with status {status} ({context})")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url} ({context})")]
    Decode {
        url: String,
        context: String,
        #[source]
        source: reqwest::Error,
    },

    // Record had a usable month label but lacked a required summary field.
    #[error("Monthly record for {month} is missing required field '{field}'")]
    MalformedRecord { month: String, field: &'static str },
}
