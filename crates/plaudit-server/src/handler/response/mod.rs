//! Response types for HTTP handlers.

mod embed;
mod error_response;
mod monitors;
mod permissions;

pub use embed::*;
pub use error_response::*;
pub use monitors::*;
pub use permissions::*;
