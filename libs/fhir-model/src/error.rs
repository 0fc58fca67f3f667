//! Error types for the FHIR object model

use thiserror::Error;

/// Structural validity errors raised by `build()`.
///
/// Every variant that concerns a single field carries the element name so
/// callers can report exactly which part of the builder state was rejected.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required element: '{0}'")]
    MissingElement(&'static str),

    #[error("Invalid type: {found} for choice element: '{element}' must be one of: {allowed:?}")]
    InvalidChoiceType {
        element: &'static str,
        found: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("ele-1: {0} must have a value or children")]
    EmptyElement(&'static str),

    #[error("Invalid {type_name} value: {message}")]
    InvalidValue {
        type_name: &'static str,
        message: String,
    },

    #[error("Invalid reference for element '{element}': {message}")]
    InvalidReference {
        element: &'static str,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Name of the offending element, when the error concerns a single field.
    pub fn element(&self) -> Option<&'static str> {
        match self {
            Error::MissingElement(element)
            | Error::InvalidChoiceType { element, .. }
            | Error::InvalidReference { element, .. } => Some(*element),
            _ => None,
        }
    }

    pub(crate) fn invalid_value(type_name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidValue {
            type_name,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = Error::MissingElement("category");
        assert_eq!(err.to_string(), "Missing required element: 'category'");
        assert_eq!(err.element(), Some("category"));
    }

    #[test]
    fn test_choice_message_lists_allowed_types() {
        let err = Error::InvalidChoiceType {
            element: "source",
            found: "Coding",
            allowed: &["Attachment", "Reference"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid type: Coding for choice element: 'source' must be one of: [\"Attachment\", \"Reference\"]"
        );
        assert_eq!(err.element(), Some("source"));
    }

    #[test]
    fn test_empty_element_has_no_field() {
        let err = Error::EmptyElement("Coding");
        assert!(err.element().is_none());
        assert!(err.to_string().starts_with("ele-1"));
    }
}
