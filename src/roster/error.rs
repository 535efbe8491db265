use thiserror::Error;

/// A mutation or lookup named an entity the store does not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no roster entry named '{0}'")]
pub struct NotFound(pub String);
