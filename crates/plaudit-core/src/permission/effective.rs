//! Effective role of a user inside a project.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CapabilitySet, Project, Role, User};
use crate::TRACING_TARGET_PERMISSION;

/// Computes the role a user holds inside a project.
///
/// First match wins:
///
/// 1. the user owns the project: [`Role::Admin`];
/// 2. the project carries the `editor` tag, or lists the user as an editor:
///    [`Role::Editor`];
/// 3. the user's global role is `admin`: [`Role::Admin`];
/// 4. otherwise [`Role::Editor`].
///
/// A project that is not loaded yet contributes no signal, leaving only the
/// global role to decide.
pub fn resolve_effective_role(user: Option<&User>, project: Option<&Project>) -> Role {
    if let (Some(user), Some(project)) = (user, project)
        && project.is_owned_by(&user.id)
    {
        tracing::trace!(
            target: TRACING_TARGET_PERMISSION,
            user_id = %user.id,
            "project owner resolved as admin"
        );
        return Role::Admin;
    }

    if let Some(project) = project {
        let listed = user.is_some_and(|user| project.lists_editor(&user.id));
        if project.has_editor_tag() || listed {
            return Role::Editor;
        }
    }

    match user.and_then(User::global_role) {
        Some(Role::Admin) => Role::Admin,
        _ => Role::Editor,
    }
}

/// The effective role of a user in a project along with its capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EffectivePermissions {
    /// Role after reconciling ownership, project tag and global role.
    pub role: Role,
    /// Capabilities granted by that role.
    pub capabilities: CapabilitySet,
}

impl EffectivePermissions {
    /// Resolves the effective role and its capability set.
    pub fn resolve(user: Option<&User>, project: Option<&Project>) -> Self {
        let role = resolve_effective_role(user, project);
        Self {
            role,
            capabilities: role.capabilities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_overrides_global_role() {
        let user = User::new("u1", Some("editor"));
        let project = Project::new("u1");
        assert_eq!(resolve_effective_role(Some(&user), Some(&project)), Role::Admin);
    }

    #[test]
    fn ownership_overrides_editor_tag() {
        let user = User::new("u1", None);
        let project = Project::new("u1").with_role("editor");
        assert_eq!(resolve_effective_role(Some(&user), Some(&project)), Role::Admin);
    }

    #[test]
    fn project_editor_tag_overrides_global_admin() {
        let user = User::new("u1", Some("admin"));
        let project = Project::new("u2").with_role("editor");
        assert_eq!(resolve_effective_role(Some(&user), Some(&project)), Role::Editor);
    }

    #[test]
    fn editor_listing_overrides_global_admin() {
        let user = User::new("u1", Some("admin"));
        let project = Project::new("u2").with_editor("u1", Some("active"));
        assert_eq!(resolve_effective_role(Some(&user), Some(&project)), Role::Editor);
    }

    #[test]
    fn global_admin_without_project_signal() {
        let user = User::new("u1", Some("admin"));
        let project = Project::new("u2").with_role("owner");
        assert_eq!(resolve_effective_role(Some(&user), Some(&project)), Role::Admin);
    }

    #[test]
    fn missing_project_falls_back_to_global_role() {
        let editor = User::new("u1", Some("editor"));
        assert_eq!(resolve_effective_role(Some(&editor), None), Role::Editor);

        let admin = User::new("u1", Some("admin"));
        assert_eq!(resolve_effective_role(Some(&admin), None), Role::Admin);
    }

    #[test]
    fn unknown_or_missing_inputs_fall_back_to_editor() {
        assert_eq!(resolve_effective_role(None, None), Role::Editor);

        let owner = User::new("u1", Some("owner"));
        assert_eq!(resolve_effective_role(Some(&owner), None), Role::Editor);

        let project = Project::new("u1");
        assert_eq!(resolve_effective_role(None, Some(&project)), Role::Editor);
    }

    #[test]
    fn effective_permissions_follow_role() {
        let user = User::new("u1", Some("editor"));
        let project = Project::new("u1");

        let owner = EffectivePermissions::resolve(Some(&user), Some(&project));
        assert_eq!(owner.role, Role::Admin);
        assert!(owner.capabilities.can_manage_editors);

        let visitor = EffectivePermissions::resolve(Some(&user), None);
        assert_eq!(visitor.role, Role::Editor);
        assert!(!visitor.capabilities.can_delete_project);
    }
}
