//! Permission response types.

use plaudit_core::permission::{CapabilitySet, Role};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Effective role of a user inside a project.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPermissions {
    /// Role after reconciling ownership, project tag and global role.
    pub effective_role: Role,
    /// Capabilities granted by the effective role.
    pub capabilities: CapabilitySet,
    /// Whether the user's global role is `admin`.
    pub is_admin: bool,
    /// Whether the user's global role is `editor`.
    pub is_editor: bool,
}

/// Capability set of a global role string.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissions {
    /// The role string as requested.
    pub role: String,
    /// Capabilities granted to it.
    pub capabilities: CapabilitySet,
}
