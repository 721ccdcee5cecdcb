use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tripr_common::error::TriprResult;
use tripr_common::types::GroupMember;

use super::repositories::GroupRepository;

#[derive(Clone, Default)]
pub struct MemoryGroupRepository {
    members: Arc<RwLock<Vec<GroupMember>>>,
}

impl MemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for MemoryGroupRepository {
    async fn list(&self) -> TriprResult<Vec<GroupMember>> {
        Ok(self.members.read().await.clone())
    }

    async fn add(&self, member: GroupMember) -> TriprResult<Vec<GroupMember>> {
        let mut members = self.members.write().await;
        members.push(member);
        tracing::debug!(count = members.len(), "group member added");
        Ok(members.clone())
    }
}
