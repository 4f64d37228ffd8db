use thiserror::Error;

/// Errors reported by the containers of this crate.
///
/// Every error is raised before the container is touched,
/// so a failed call always leaves the container unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A map insert found an entry with an equal key.
    #[error("an entry with the same key already exists")]
    DuplicateKey,
    /// A map lookup or update was given a key that is not present.
    #[error("the given key was not present in the map")]
    KeyNotFound,
    /// A mutation was attempted through a read-only view.
    #[error("the view is read-only")]
    UnsupportedOperation,
    /// A heap was peeked at or popped while empty.
    #[error("the container is empty")]
    EmptyContainer,
}

pub type Result<T> = std::result::Result<T, Error>;
