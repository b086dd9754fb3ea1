pub mod adapter;
pub mod descriptor;
pub mod error;
pub mod ffi;
pub mod registry;
pub mod types;

pub use types::*;

// Re-export commonly used types
pub use adapter::{DispatchAdapter, Disposition, KeyboardHost};
pub use error::{Error, Result};
pub use registry::{Callback, Registry, SubscriptionId};
