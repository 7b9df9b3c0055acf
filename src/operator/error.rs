use std::any::Any;

use thiserror::Error;

/// Failure emitted by a derived source when its transform or predicate
/// panics.
///
/// Operator methods require `F: From<TransformError>` so the wrap composes
/// with caller-defined failure types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transform panicked: {message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "opaque panic payload".to_string()
        };
        Self { message }
    }

    /// The captured panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("went sideways");
        let error = TransformError::from_panic(payload.as_ref());
        assert_eq!(error.message(), "went sideways");
        assert_eq!(error.to_string(), "transform panicked: went sideways");
    }

    #[test]
    fn captures_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(format!("bad index {}", 3));
        let error = TransformError::from_panic(payload.as_ref());
        assert_eq!(error.message(), "bad index 3");
    }

    #[test]
    fn tolerates_unknown_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42u64);
        let error = TransformError::from_panic(payload.as_ref());
        assert_eq!(error.message(), "opaque panic payload");
    }
}
