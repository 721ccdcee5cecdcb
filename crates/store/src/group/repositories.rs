use async_trait::async_trait;

use tripr_common::error::TriprResult;
use tripr_common::types::GroupMember;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn list(&self) -> TriprResult<Vec<GroupMember>>;

    /// Append `member` and return the full member list, oldest first.
    async fn add(&self, member: GroupMember) -> TriprResult<Vec<GroupMember>>;
}
