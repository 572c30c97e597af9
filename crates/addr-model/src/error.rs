use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown component name: {name}")]
    UnknownComponent { name: String },
    #[error("expected a JSON object of address components, got {kind}")]
    NotAnObject { kind: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
