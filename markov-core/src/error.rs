use thiserror::Error;

/// Errors raised by [`Chain`](crate::Chain) operations.
///
/// Only input validation can fail; generation never does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
	/// A call received arguments it cannot work with
	/// (ex. `add` with no token at all).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}
