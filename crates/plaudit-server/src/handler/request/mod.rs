//! Request types for HTTP handlers.

mod embed;
mod media;
mod paths;
mod permissions;

pub use embed::*;
pub use media::*;
pub use paths::*;
pub use permissions::*;
