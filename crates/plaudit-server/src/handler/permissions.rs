//! Permission handlers.
//!
//! These report UI affordances only. A client hides or shows controls from
//! the capability flags; the backend still enforces every write.

use axum::Router;
use axum::routing::{get, post};
use plaudit_core::permission::{self, EffectivePermissions};

use super::request::{ResolvePermissions, RolePathParams};
use super::response::{ResolvedPermissions, RolePermissions};
use crate::extract::{Json, Path};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for permission operations.
const TRACING_TARGET: &str = "plaudit_server::handler::permissions";

/// Resolves a user's effective role and capabilities inside a project.
#[tracing::instrument(skip_all)]
async fn resolve_permissions(
    Json(request): Json<ResolvePermissions>,
) -> Result<Json<ResolvedPermissions>> {
    let user = request.user.as_ref();
    let project = request.project.as_ref();
    let global_role = user.and_then(|user| user.role.as_deref());

    let EffectivePermissions { role, capabilities } = EffectivePermissions::resolve(user, project);

    tracing::debug!(
        target: TRACING_TARGET,
        user_id = user.map(|user| user.id.as_str()),
        has_project = project.is_some(),
        effective_role = %role,
        "permissions resolved"
    );

    Ok(Json(ResolvedPermissions {
        effective_role: role,
        capabilities,
        is_admin: permission::is_admin(global_role),
        is_editor: permission::is_editor(global_role),
    }))
}

/// Returns the capability set of a global role string.
#[tracing::instrument(skip_all)]
async fn role_permissions(
    Path(path_params): Path<RolePathParams>,
) -> Result<Json<RolePermissions>> {
    let capabilities = permission::get_permissions(Some(&path_params.role));

    Ok(Json(RolePermissions {
        role: path_params.role,
        capabilities,
    }))
}

/// Returns a [`Router`] with all permission routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/permissions/resolve", post(resolve_permissions))
        .route("/permissions/{role}", get(role_permissions))
}

#[cfg(test)]
mod tests {
    use plaudit_core::permission::{CapabilitySet, Role};
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    async fn resolve(body: serde_json::Value) -> anyhow::Result<ResolvedPermissions> {
        let server = create_test_server_with_router(|_| routes())?;
        let response = server.post("/permissions/resolve").json(&body).await;
        response.assert_status_ok();
        Ok(response.json::<ResolvedPermissions>())
    }

    #[tokio::test]
    async fn owner_is_admin_in_own_project() -> anyhow::Result<()> {
        let resolved = resolve(json!({
            "user": { "id": "u1", "role": "editor" },
            "project": { "ownerId": "u1" }
        }))
        .await?;

        assert_eq!(resolved.effective_role, Role::Admin);
        assert_eq!(resolved.capabilities, CapabilitySet::ADMIN);
        assert!(!resolved.is_admin);
        assert!(resolved.is_editor);
        Ok(())
    }

    #[tokio::test]
    async fn editor_tag_outranks_global_admin() -> anyhow::Result<()> {
        let resolved = resolve(json!({
            "user": { "id": "u1", "role": "admin" },
            "project": { "ownerId": "u2", "role": "editor" }
        }))
        .await?;

        assert_eq!(resolved.effective_role, Role::Editor);
        assert!(!resolved.capabilities.can_delete_project);
        assert!(resolved.is_admin);
        Ok(())
    }

    #[tokio::test]
    async fn global_admin_without_project() -> anyhow::Result<()> {
        let resolved = resolve(json!({ "user": { "id": "u1", "role": "admin" } })).await?;
        assert_eq!(resolved.effective_role, Role::Admin);
        Ok(())
    }

    #[tokio::test]
    async fn empty_request_is_editor() -> anyhow::Result<()> {
        let resolved = resolve(json!({})).await?;
        assert_eq!(resolved.effective_role, Role::Editor);
        assert_eq!(resolved.capabilities, CapabilitySet::EDITOR);
        assert!(!resolved.is_admin);
        assert!(!resolved.is_editor);
        Ok(())
    }

    #[tokio::test]
    async fn role_capability_sets() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes())?;

        let admin = server.get("/permissions/admin").await.json::<RolePermissions>();
        assert_eq!(admin.capabilities, CapabilitySet::ADMIN);

        for role in ["editor", "Admin", "owner"] {
            let response = server.get(&format!("/permissions/{role}")).await;
            response.assert_status_ok();

            let body = response.json::<RolePermissions>();
            assert_eq!(body.role, role);
            assert_eq!(body.capabilities, CapabilitySet::EDITOR);
        }

        Ok(())
    }

    #[tokio::test]
    async fn capability_flags_are_camel_case() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes())?;

        let body = server
            .get("/permissions/admin")
            .await
            .json::<serde_json::Value>();
        assert_eq!(body["capabilities"]["canDeleteProject"], true);
        assert_eq!(body["capabilities"]["canManageEditors"], true);
        assert_eq!(body["capabilities"].as_object().map(|flags| flags.len()), Some(12));
        Ok(())
    }
}
