//! Account and project membership views consumed by the resolver.
//!
//! These mirror the objects the backend returns. Role fields stay raw strings
//! so a value outside `{admin, editor}` degrades instead of failing to parse.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Role;

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: String,
    /// Global role string as stored on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// Creates a user with the given id and optional global role.
    pub fn new(id: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            id: id.into(),
            role: role.map(str::to_owned),
        }
    }

    /// Returns the global role, if it is a recognized literal.
    #[inline]
    pub fn global_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

/// An editor assignment on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EditorAssignment {
    /// The assigned editor's account id.
    pub user_id: String,
    /// Assignment status as reported by the backend (e.g. `pending`, `active`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The membership view of a project: its single owner, the caller's
/// project-scoped role tag and the editor assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Id of the owning account.
    pub owner_id: String,
    /// Project-scoped role tag fetched for the caller (`editor`, `owner`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Editor assignments, when the caller loaded them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<EditorAssignment>,
}

impl Project {
    /// Creates a project view owned by the given account.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            role: None,
            editors: Vec::new(),
        }
    }

    /// Sets the project-scoped role tag.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Adds an editor assignment.
    pub fn with_editor(mut self, user_id: impl Into<String>, status: Option<&str>) -> Self {
        self.editors.push(EditorAssignment {
            user_id: user_id.into(),
            status: status.map(str::to_owned),
        });
        self
    }

    /// Returns whether the given account owns this project.
    #[inline]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    /// Returns whether the project-scoped role tag is exactly `"editor"`.
    #[inline]
    pub fn has_editor_tag(&self) -> bool {
        self.role.as_deref() == Some("editor")
    }

    /// Returns whether the given account appears among the editor assignments.
    pub fn lists_editor(&self, user_id: &str) -> bool {
        self.editors.iter().any(|editor| editor.user_id == user_id)
    }
}
