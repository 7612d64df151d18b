//! Convenient re-exports for common use.

pub use crate::embed::{
    EmbedConfig, EmbedParams, EmbedUrlBuilder, ItemLimit, Layout, Theme, decode, encode,
    iframe_snippet,
};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::media::VideoLink;
pub use crate::permission::{
    Capability, CapabilitySet, EffectivePermissions, Project, Role, User, get_permissions,
    is_admin, is_editor, resolve_effective_role,
};
