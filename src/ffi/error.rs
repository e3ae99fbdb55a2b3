//! The boundary error taxonomy.
//!
//! Nothing here ever crosses the boundary: every entry point catches
//! these locally, logs at error severity, and returns the documented
//! fallback (sentinel handle 0, empty string, identity echo).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("{op}: {family} handle {id} not found")]
    NotFound {
        op: &'static str,
        family: &'static str,
        id: u64,
    },

    #[error("{op}: {message}")]
    Validation { op: &'static str, message: String },

    #[error("{op}: no renderer installed")]
    RendererMissing { op: &'static str },

    #[error("{op}: renderer output is gone")]
    OutputMissing { op: &'static str },

    #[error("{op}: string allocation failed")]
    Alloc { op: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let e = BoundaryError::NotFound {
            op: "render",
            family: "style",
            id: 42,
        };
        assert_eq!(e.to_string(), "render: style handle 42 not found");

        let e = BoundaryError::Validation {
            op: "width",
            message: "invalid width: -1 (must be non-negative)".into(),
        };
        assert!(e.to_string().starts_with("width: "));
    }
}
