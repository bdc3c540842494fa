use thiserror::Error;

/// The only text a user ever sees for a failed optimisation call.
pub const ROUTE_FAILURE_MESSAGE: &str = "Failed to fetch optimized route. Please try again.";

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Service returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response did not contain a route geometry")]
    MissingGeometry,
}

impl RoutingError {
    /// Transport, status and decode failures all collapse to the same banner text.
    pub fn user_message(&self) -> &'static str {
        ROUTE_FAILURE_MESSAGE
    }

    /// The response arrived but did not have the expected shape.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::MissingGeometry)
    }
}
