pub mod context;
pub mod error;

pub use context::OperationContext;
pub use error::{ErrorKind, PluginError};
