use serde::{Deserialize, Serialize};

use super::id;

wire_enum! {
    /// Role a user holds inside one project.
    pub enum MembershipRole {
        Owner => "owner",
        Member => "member",
        Viewer => "viewer",
    }
}

impl Default for MembershipRole {
    fn default() -> Self {
        MembershipRole::Member
    }
}

/// A raw record from the `/memberships` resource.
///
/// Some backend builds only return `role` and `is_active`; the id fields are
/// therefore optional and records without a `user_id` never match a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub membership_id: Option<i64>,
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub role: MembershipRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub joined_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMembership {
    pub user_id: i64,
    pub project_id: i64,
    pub role: MembershipRole,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MembershipUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MembershipRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
