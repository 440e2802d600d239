use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Everything that can fail during one selection or analysis attempt.
///
/// Every variant is terminal for that attempt: it is shown to the user as a
/// single message and cleared on the next successful selection or reset.
/// None of them take the process down.
#[derive(Debug, Error)]
pub enum AppError {
    /// The selected file's content is not an image.
    #[error("Por favor selecciona un archivo de imagen válido")]
    InvalidFileType,

    /// The selected file exceeds the upload ceiling.
    #[error("El archivo es demasiado grande. Máximo 10MB")]
    FileTooLarge,

    /// The backend answered with a non-success status.
    #[error("Error del servidor: {status}")]
    Http { status: u16 },

    /// Transport failure or a malformed response body. The reason is kept
    /// for the log; the user sees a generic localized message.
    #[error("Error al analizar la imagen")]
    NetworkOrParse { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_localized() {
        assert_eq!(
            AppError::InvalidFileType.to_string(),
            "Por favor selecciona un archivo de imagen válido"
        );
        assert_eq!(
            AppError::FileTooLarge.to_string(),
            "El archivo es demasiado grande. Máximo 10MB"
        );
        assert_eq!(AppError::Http { status: 502 }.to_string(), "Error del servidor: 502");
    }

    #[test]
    fn network_errors_hide_the_reason_from_the_user() {
        let err = AppError::NetworkOrParse {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Error al analizar la imagen");
    }
}
