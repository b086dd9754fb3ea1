pub mod combination;
pub mod event;
pub mod key_codes;
pub mod modifiers;
pub mod platform;

pub use combination::*;
pub use event::*;
pub use key_codes::*;
pub use modifiers::*;
pub use platform::*;
