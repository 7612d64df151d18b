//! Role capability sets and project-scoped effective roles.
//!
//! Two layers make up the permission model:
//!
//! - [`get_permissions`] maps a global role string to a fixed [`CapabilitySet`].
//!   Anything that is not literally `"admin"` receives the editor set, so an
//!   unknown or missing role always lands on the least-privileged side.
//! - [`resolve_effective_role`] reconciles project ownership, the project-level
//!   editor tag and the global role into the [`Role`] a user holds inside one
//!   project. It is recomputed on every call and never stored.
//!
//! Both only drive UI affordances. Enforcement happens in the backend.

mod capability;
mod effective;
mod membership;
mod role;

pub use capability::{Capability, CapabilitySet};
pub use effective::{EffectivePermissions, resolve_effective_role};
pub use membership::{EditorAssignment, Project, User};
pub use role::{Role, get_permissions, is_admin, is_editor};
