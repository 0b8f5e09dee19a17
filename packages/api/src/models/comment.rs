use serde::{Deserialize, Serialize};

use super::id;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub comment_id: Option<i64>,
    pub content: String,
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub project_id: Option<i64>,
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComment {
    pub content: String,
    pub project_id: i64,
    pub user_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CommentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
