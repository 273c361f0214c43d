use std::fmt;

/// Errores que pueden surgir al tomar un pedido.
/// `InvalidValue` es el unico error de validacion; lleva un mensaje que indica la regla violada.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderError {
    InvalidValue(String),
    FileReaderError(String),
}

impl OrderError {
    pub fn invalid<S: Into<String>>(message: S) -> OrderError {
        OrderError::InvalidValue(message.into())
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::InvalidValue(message) => write!(f, "invalid value: {}", message),
            OrderError::FileReaderError(message) => {
                write!(f, "could not read the orders file: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl From<serde_json::Error> for OrderError {
    fn from(error: serde_json::Error) -> Self {
        OrderError::InvalidValue(error.to_string())
    }
}

impl From<std::io::Error> for OrderError {
    fn from(error: std::io::Error) -> Self {
        OrderError::FileReaderError(error.to_string())
    }
}
