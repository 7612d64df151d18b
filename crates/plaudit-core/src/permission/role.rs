//! Account role enumeration and role-string helpers.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::CapabilitySet;
use crate::TRACING_TARGET_PERMISSION;

/// Defines the role of an account, globally or inside a single project.
///
/// The backend stores roles as plain strings. [`Role::parse`] accepts only the
/// two exact literals; callers holding a raw string should go through
/// [`get_permissions`], [`is_admin`] or [`is_editor`] instead of matching
/// on it themselves.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Full control, including project deletion and editor management.
    Admin,

    /// Manages testimonials, forms and embeds, but not the project itself.
    #[default]
    Editor,
}

impl Role {
    /// Parses a role literal, returning `None` for anything unrecognized.
    ///
    /// Matching is exact and case-sensitive: `"Admin"` is not an admin.
    #[inline]
    pub fn parse(role: &str) -> Option<Self> {
        role.parse().ok()
    }

    /// Returns the fixed capability set granted to this role.
    #[inline]
    pub const fn capabilities(self) -> CapabilitySet {
        CapabilitySet::for_role(self)
    }
}

/// Returns the capability set for a raw role string.
///
/// Only the literal `"admin"` yields the admin set. Missing, `"editor"` and
/// unrecognized values all fall back to the editor set.
pub fn get_permissions(role: Option<&str>) -> CapabilitySet {
    match role.and_then(Role::parse) {
        Some(role) => role.capabilities(),
        None => {
            tracing::trace!(
                target: TRACING_TARGET_PERMISSION,
                role = ?role,
                "unrecognized role, using editor capabilities"
            );
            CapabilitySet::EDITOR
        }
    }
}

/// Returns true iff the role string is exactly `"admin"`.
#[inline]
pub fn is_admin(role: Option<&str>) -> bool {
    role == Some("admin")
}

/// Returns true iff the role string is exactly `"editor"`.
///
/// Not the complement of [`is_admin`]: a missing or unknown role is neither.
#[inline]
pub fn is_editor(role: Option<&str>) -> bool {
    role == Some("editor")
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parse_exact_literals_only() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("editor"), Some(Role::Editor));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(" admin"), None);
        assert_eq!(Role::parse("owner"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for role in Role::iter() {
            assert_eq!(Role::parse(role.as_ref()), Some(role));
        }
    }

    #[test]
    fn serde_uses_lowercase_literals() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, Role::Editor);
    }

    #[test]
    fn admin_gets_every_capability() {
        let capabilities = get_permissions(Some("admin"));
        assert!(capabilities.granted().len() == 12);
        assert_eq!(capabilities, CapabilitySet::ADMIN);
    }

    #[test]
    fn non_admin_roles_share_the_editor_set() {
        let editor = get_permissions(Some("editor"));
        assert_eq!(editor, get_permissions(None));
        assert_eq!(editor, get_permissions(Some("bogus")));
        assert_eq!(editor, get_permissions(Some("ADMIN")));
        assert_eq!(editor, CapabilitySet::EDITOR);
    }

    #[test]
    fn editor_differs_from_admin_in_two_flags() {
        let admin = get_permissions(Some("admin"));
        let editor = get_permissions(Some("editor"));

        assert!(!editor.can_delete_project);
        assert!(!editor.can_manage_editors);
        assert_eq!(
            CapabilitySet {
                can_delete_project: true,
                can_manage_editors: true,
                ..editor
            },
            admin
        );
    }

    #[test]
    fn admin_and_editor_checks_are_independent() {
        assert!(is_admin(Some("admin")));
        assert!(!is_editor(Some("admin")));

        assert!(is_editor(Some("editor")));
        assert!(!is_admin(Some("editor")));

        for role in [None, Some("owner"), Some(""), Some("Editor")] {
            assert!(!is_admin(role));
            assert!(!is_editor(role));
        }
    }
}
