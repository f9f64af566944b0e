mod collaboration;
mod envelope;
mod error_code;
mod message_info;
mod party_info;
mod payload;
mod properties;
mod signal;

pub use collaboration::*;
pub use envelope::*;
pub use error_code::*;
pub use message_info::*;
pub use party_info::*;
pub use payload::*;
pub use properties::*;
pub use signal::*;
