use contracts::shared::list_envelope::EnvelopeError;
use thiserror::Error;

pub const UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el servidor";

/// Failure of one REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A response arrived carrying the backend's own `message`
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request was sent but no response arrived
    #[error("No se pudo conectar con el servidor")]
    Unreachable,

    /// A response arrived but its body did not have the expected shape
    #[error("{0}")]
    Decode(#[from] EnvelopeError),

    /// A non-2xx response without a usable `message`
    #[error("Error {status} del servidor")]
    Status { status: u16 },

    /// Anything else (request building, body parsing)
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response.
    ///
    /// The server's `message` is used verbatim when the body has one.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        match server_message {
            Some(message) => ApiError::Server { status, message },
            None => ApiError::Status { status },
        }
    }

    /// Text shown to the user.
    ///
    /// Priority: the server-provided message, then the generic
    /// "could not reach the server" text, then the raw error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Server { status: 401, .. } | ApiError::Status { status: 401 }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_has_priority() {
        let err = ApiError::from_status(409, Some("El carné ya existe".into()));
        assert_eq!(err.user_message(), "El carné ya existe");
    }

    #[test]
    fn unreachable_uses_generic_text() {
        assert_eq!(ApiError::Unreachable.user_message(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn raw_error_is_last_resort() {
        assert_eq!(
            ApiError::from_status(500, None).user_message(),
            "Error 500 del servidor"
        );
        assert_eq!(
            ApiError::Other("expected value at line 1".into()).user_message(),
            "expected value at line 1"
        );
    }

    #[test]
    fn decode_errors_carry_envelope_text() {
        let err: ApiError = EnvelopeError::NotAnObject.into();
        assert_eq!(
            err.user_message(),
            "La respuesta del servidor no es un objeto JSON"
        );
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ApiError::from_status(401, Some("Token expirado".into())).is_unauthorized());
        assert!(ApiError::from_status(401, None).is_unauthorized());
        assert!(!ApiError::from_status(403, None).is_unauthorized());
        assert!(!ApiError::Unreachable.is_unauthorized());
    }
}
