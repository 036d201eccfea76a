/* 📖 # Why have fixarr_base as a core library?
fixarr_base provides the error type and tracing setup shared by the engine and the CLI.
Keeping them apart from the array code means the CLI can report errors without
depending on engine internals.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, FixarrError, FixarrResult, ResultExt};
