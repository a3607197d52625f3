use thiserror::Error;

/// Errors surfaced by the recycler.
///
/// All of them are local and synchronous: a failed call leaves the engine state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} is out of range for {count} objects")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("the window holds no slots")]
    EmptyWindow,
    #[error("slot factory produced {created} of {requested} requested slots")]
    SlotCreationUnavailable { requested: usize, created: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
