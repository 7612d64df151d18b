//! Permission request types.

use plaudit_core::permission::{Project, User};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request payload for resolving a user's effective role in a project.
///
/// Either side may be absent: a signed-out visitor has no user, and a
/// project that has not loaded yet has no project.
///
/// # Example
///
/// ```json
/// {
///   "user": { "id": "u1", "role": "admin" },
///   "project": { "ownerId": "u2", "role": "editor" }
/// }
/// ```
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvePermissions {
    /// The signed-in account.
    #[serde(default)]
    pub user: Option<User>,
    /// The project membership view.
    #[serde(default)]
    pub project: Option<Project>,
}
