use thiserror::Error;

/// Errors raised while parsing a template. Rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("malformed tag at byte {offset}: {snippet:?}")]
    Syntax { offset: usize, snippet: String },

    #[error("section '{name}' is never closed")]
    UnclosedSection { name: String },

    #[error("closing tag '{found}' does not match open section '{expected}'")]
    MismatchedSection { expected: String, found: String },

    #[error("closing tag '{name}' has no open section")]
    UnexpectedClose { name: String },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
