//! Capability flags and the per-role capability record.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use super::Role;

/// A single action a user may be offered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Capability {
    // Project-level capabilities
    /// Can create new projects.
    CreateProject,
    /// Can delete a project.
    DeleteProject,
    /// Can add and remove project editors.
    ManageEditors,
    /// Can update project settings and metadata.
    EditProject,
    /// Can view a project.
    ViewProject,

    // Testimonial capabilities
    /// Can add testimonials manually.
    CreateTestimonial,
    /// Can edit existing testimonials.
    EditTestimonial,
    /// Can delete testimonials.
    DeleteTestimonial,
    /// Can approve or reject submitted testimonials.
    ApproveTestimonial,

    // Collection and publishing capabilities
    /// Can create and edit capture forms.
    ManageForms,
    /// Can generate embed widgets.
    ManageEmbeds,
    /// Can import testimonials from external sources.
    ImportTestimonials,
}

impl Capability {
    /// Checks if the given role is granted this capability.
    pub const fn is_permitted_by_role(self, role: Role) -> bool {
        match self {
            Self::DeleteProject | Self::ManageEditors => matches!(role, Role::Admin),
            Self::CreateProject
            | Self::EditProject
            | Self::ViewProject
            | Self::CreateTestimonial
            | Self::EditTestimonial
            | Self::DeleteTestimonial
            | Self::ApproveTestimonial
            | Self::ManageForms
            | Self::ManageEmbeds
            | Self::ImportTestimonials => matches!(role, Role::Admin | Role::Editor),
        }
    }

    /// Returns the key this capability uses in a serialized [`CapabilitySet`].
    pub const fn flag_name(self) -> &'static str {
        match self {
            Self::CreateProject => "canCreateProject",
            Self::DeleteProject => "canDeleteProject",
            Self::ManageEditors => "canManageEditors",
            Self::EditProject => "canEditProject",
            Self::ViewProject => "canViewProject",
            Self::CreateTestimonial => "canCreateTestimonial",
            Self::EditTestimonial => "canEditTestimonial",
            Self::DeleteTestimonial => "canDeleteTestimonial",
            Self::ApproveTestimonial => "canApproveTestimonial",
            Self::ManageForms => "canManageForms",
            Self::ManageEmbeds => "canManageEmbeds",
            Self::ImportTestimonials => "canImportTestimonials",
        }
    }

    /// Returns all capabilities granted to the given role.
    pub fn capabilities_for_role(role: Role) -> Vec<Self> {
        Self::iter()
            .filter(|capability| capability.is_permitted_by_role(role))
            .collect()
    }
}

/// The full set of capability flags for one role.
///
/// Always fully populated: every flag is present in the serialized form,
/// there are no per-project overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub can_create_project: bool,
    pub can_delete_project: bool,
    pub can_manage_editors: bool,
    pub can_edit_project: bool,
    pub can_view_project: bool,
    pub can_create_testimonial: bool,
    pub can_edit_testimonial: bool,
    pub can_delete_testimonial: bool,
    pub can_approve_testimonial: bool,
    pub can_manage_forms: bool,
    pub can_manage_embeds: bool,
    pub can_import_testimonials: bool,
}

impl CapabilitySet {
    /// Capabilities of [`Role::Admin`].
    pub const ADMIN: Self = Self::for_role(Role::Admin);
    /// Capabilities of [`Role::Editor`], also used for any unrecognized role.
    pub const EDITOR: Self = Self::for_role(Role::Editor);

    /// Builds the capability set of a role.
    pub const fn for_role(role: Role) -> Self {
        Self {
            can_create_project: Capability::CreateProject.is_permitted_by_role(role),
            can_delete_project: Capability::DeleteProject.is_permitted_by_role(role),
            can_manage_editors: Capability::ManageEditors.is_permitted_by_role(role),
            can_edit_project: Capability::EditProject.is_permitted_by_role(role),
            can_view_project: Capability::ViewProject.is_permitted_by_role(role),
            can_create_testimonial: Capability::CreateTestimonial.is_permitted_by_role(role),
            can_edit_testimonial: Capability::EditTestimonial.is_permitted_by_role(role),
            can_delete_testimonial: Capability::DeleteTestimonial.is_permitted_by_role(role),
            can_approve_testimonial: Capability::ApproveTestimonial.is_permitted_by_role(role),
            can_manage_forms: Capability::ManageForms.is_permitted_by_role(role),
            can_manage_embeds: Capability::ManageEmbeds.is_permitted_by_role(role),
            can_import_testimonials: Capability::ImportTestimonials.is_permitted_by_role(role),
        }
    }

    /// Returns whether the set grants the given capability.
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::CreateProject => self.can_create_project,
            Capability::DeleteProject => self.can_delete_project,
            Capability::ManageEditors => self.can_manage_editors,
            Capability::EditProject => self.can_edit_project,
            Capability::ViewProject => self.can_view_project,
            Capability::CreateTestimonial => self.can_create_testimonial,
            Capability::EditTestimonial => self.can_edit_testimonial,
            Capability::DeleteTestimonial => self.can_delete_testimonial,
            Capability::ApproveTestimonial => self.can_approve_testimonial,
            Capability::ManageForms => self.can_manage_forms,
            Capability::ManageEmbeds => self.can_manage_embeds,
            Capability::ImportTestimonials => self.can_import_testimonials,
        }
    }

    /// Returns the granted capabilities in declaration order.
    pub fn granted(&self) -> Vec<Capability> {
        Capability::iter()
            .filter(|capability| self.allows(*capability))
            .collect()
    }
}

impl Default for CapabilitySet {
    /// The least-privileged set.
    fn default() -> Self {
        Self::EDITOR
    }
}

// Compile-time checks on the role table.
const _: () = {
    assert!(Capability::DeleteProject.is_permitted_by_role(Role::Admin));
    assert!(Capability::ManageEditors.is_permitted_by_role(Role::Admin));
    assert!(!Capability::DeleteProject.is_permitted_by_role(Role::Editor));
    assert!(!Capability::ManageEditors.is_permitted_by_role(Role::Editor));
    assert!(Capability::ApproveTestimonial.is_permitted_by_role(Role::Editor));
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_set_has_exactly_the_documented_keys() {
        for role in Role::iter() {
            let value = serde_json::to_value(CapabilitySet::for_role(role)).unwrap();
            let object = value.as_object().unwrap();

            assert_eq!(object.len(), 12);
            for capability in Capability::iter() {
                assert!(
                    object.get(capability.flag_name()).is_some_and(|v| v.is_boolean()),
                    "missing flag {}",
                    capability.flag_name()
                );
            }
        }
    }

    #[test]
    fn allows_agrees_with_role_table() {
        for role in Role::iter() {
            let set = CapabilitySet::for_role(role);
            for capability in Capability::iter() {
                assert_eq!(set.allows(capability), capability.is_permitted_by_role(role));
            }
        }
    }

    #[test]
    fn editor_lacks_only_project_deletion_and_editor_management() {
        let missing: Vec<_> = Capability::iter()
            .filter(|c| !CapabilitySet::EDITOR.allows(*c))
            .collect();
        assert_eq!(
            missing,
            vec![Capability::DeleteProject, Capability::ManageEditors]
        );
        assert_eq!(Capability::capabilities_for_role(Role::Editor).len(), 10);
    }

    #[test]
    fn default_is_least_privileged() {
        assert_eq!(CapabilitySet::default(), CapabilitySet::EDITOR);
    }

    #[test]
    fn capability_names_are_camel_case() {
        assert_eq!(Capability::ApproveTestimonial.as_ref(), "approveTestimonial");
        assert_eq!(
            serde_json::to_string(&Capability::ManageEmbeds).unwrap(),
            "\"manageEmbeds\""
        );
    }
}
