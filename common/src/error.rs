//! Error types of the terpene client.
//!
//! Call sites log these to the console and carry on; nothing is retried.

use thiserror::Error;

use crate::model::{AttributeKind, Id};

/// Failure of a call to the remote terpene API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },
    /// The server answered with a non-2xx status.
    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },
    /// The body was not the JSON shape we expect.
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
    /// The request body could not be serialized.
    #[error("could not encode request for {endpoint}: {message}")]
    Encode { endpoint: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("{kind} {id} is no longer attached to this terpene")]
    NotAttached { kind: AttributeKind, id: Id },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_endpoint() {
        let err = ApiError::Status {
            endpoint: "V1_Terpene".into(),
            status: 502,
        };
        assert_eq!(err.to_string(), "V1_Terpene answered with status 502");

        let err = ReconcileError::NotAttached {
            kind: AttributeKind::Taste,
            id: 3,
        };
        assert_eq!(err.to_string(), "Taste 3 is no longer attached to this terpene");
    }
}
