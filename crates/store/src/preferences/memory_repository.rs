use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tripr_common::error::TriprResult;
use tripr_common::types::UserPreferences;

use super::repositories::PreferencesRepository;

#[derive(Clone, Default)]
pub struct MemoryPreferencesRepository {
    profiles: Arc<RwLock<HashMap<String, UserPreferences>>>,
}

impl MemoryPreferencesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesRepository for MemoryPreferencesRepository {
    async fn get(&self, user_id: &str) -> TriprResult<Option<UserPreferences>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, prefs: UserPreferences) -> TriprResult<UserPreferences> {
        tracing::debug!(user_id, budget = %prefs.budget, "saving preferences");
        self.profiles
            .write()
            .await
            .insert(user_id.to_owned(), prefs.clone());
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripr_common::types::{BudgetTier, Preferences};

    #[tokio::test]
    async fn missing_user_returns_none() {
        let repo = MemoryPreferencesRepository::new();
        assert!(repo.get("user-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_profile() {
        let repo = MemoryPreferencesRepository::new();
        let first = UserPreferences {
            preferences: Preferences::with_default_keys().toggled("food"),
            budget: BudgetTier::Cheap,
        };
        repo.save("user-1", first).await.unwrap();

        let second = UserPreferences {
            preferences: Preferences::with_default_keys(),
            budget: BudgetTier::Luxury,
        };
        repo.save("user-1", second.clone()).await.unwrap();

        assert_eq!(repo.get("user-1").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = MemoryPreferencesRepository::new();
        let handle = repo.clone();
        handle
            .save("user-2", UserPreferences::default())
            .await
            .unwrap();
        assert!(repo.get("user-2").await.unwrap().is_some());
        assert!(repo.get("user-3").await.unwrap().is_none());
    }
}
