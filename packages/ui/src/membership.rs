//! Candidates for the add-member form.

use std::collections::HashSet;

use api::{ApiClient, ApiError, User};

/// Everyone except the current user and the project's existing members,
/// compared by numeric id.
pub fn available_users(
    all: &[User],
    current_user_id: i64,
    member_ids: impl IntoIterator<Item = i64>,
) -> Vec<User> {
    let mut taken: HashSet<i64> = member_ids.into_iter().collect();
    taken.insert(current_user_id);
    all.iter()
        .filter(|user| !taken.contains(&user.user_id))
        .cloned()
        .collect()
}

/// Fetch all users and the project's members concurrently.
pub async fn load_candidates(
    api: &ApiClient,
    project_id: i64,
    current_user_id: i64,
) -> Result<Vec<User>, ApiError> {
    let users = api.users();
    let projects = api.projects();
    let (all, members) = futures::try_join!(users.list(), projects.members(project_id))?;
    Ok(available_users(
        &all,
        current_user_id,
        members.iter().map(|member| member.user_id),
    ))
}

#[cfg(test)]
mod tests {
    use api::{ErrorKind, UserRole};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::test_support::{serve, server_error, signed_in_client};

    fn user(user_id: i64) -> User {
        User {
            user_id,
            name: format!("User {user_id}"),
            email: format!("user{user_id}@example.com"),
            role: UserRole::User,
            created_at: None,
        }
    }

    #[test]
    fn test_excludes_current_user_and_members() {
        let all: Vec<User> = [1, 2, 3, 4].into_iter().map(user).collect();
        let available = available_users(&all, 1, [2]);
        let ids: HashSet<i64> = available.iter().map(|u| u.user_id).collect();
        assert_eq!(ids, HashSet::from([3, 4]));
    }

    #[test]
    fn test_everyone_already_a_member() {
        let all: Vec<User> = [1, 2].into_iter().map(user).collect();
        assert!(available_users(&all, 1, [2, 2]).is_empty());
    }

    async fn all_users() -> Json<serde_json::Value> {
        Json(json!([
            {"user_id": 7, "name": "Ana", "email": "ana@example.com"},
            {"user_id": 8, "name": "Cy", "email": "cy@example.com"},
            {"user_id": 9, "name": "Bo", "email": "bo@example.com"}
        ]))
    }

    async fn members() -> Json<serde_json::Value> {
        Json(json!([{"user_id": "9", "name": "Bo", "email": "bo@example.com"}]))
    }

    #[tokio::test]
    async fn test_candidates_from_both_lists() {
        let router = Router::new()
            .route("/users/", get(all_users))
            .route("/projects/{project_id}/members", get(members));
        let client = signed_in_client(&serve(router).await);

        let candidates = load_candidates(&client, 1, 7).await.unwrap();
        let ids: Vec<i64> = candidates.iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec![8]);
    }

    #[tokio::test]
    async fn test_failed_member_list_fails_the_load() {
        let router = Router::new()
            .route("/users/", get(all_users))
            .route("/projects/{project_id}/members", get(server_error));
        let client = signed_in_client(&serve(router).await);

        let err = load_candidates(&client, 1, 7).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Server);
    }
}
