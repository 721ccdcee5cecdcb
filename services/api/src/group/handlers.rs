use axum::extract::State;
use axum::Json;
use tripr_common::error::TriprError;
use tripr_common::types::{GroupAddResponse, GroupMember};
use tripr_store::group::repositories::GroupRepository;

use crate::error::ApiError;
use crate::AppState;

pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupMember>>, ApiError> {
    let members = GroupRepository::list(&state.group_repo).await?;
    Ok(Json(members))
}

pub async fn add_member(
    State(state): State<AppState>,
    Json(member): Json<GroupMember>,
) -> Result<Json<GroupAddResponse>, ApiError> {
    if member.name.trim().is_empty() {
        return Err(TriprError::Validation("member name must not be empty".to_owned()).into());
    }

    let members = GroupRepository::add(&state.group_repo, member).await?;
    tracing::info!(members = members.len(), "group member added");
    Ok(Json(GroupAddResponse {
        success: true,
        message: Some("Member added".to_owned()),
        members,
    }))
}
