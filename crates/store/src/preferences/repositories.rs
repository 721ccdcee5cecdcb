use async_trait::async_trait;

use tripr_common::error::TriprResult;
use tripr_common::types::UserPreferences;

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn get(&self, user_id: &str) -> TriprResult<Option<UserPreferences>>;

    /// Replace whatever was stored for `user_id`.
    async fn save(&self, user_id: &str, prefs: UserPreferences) -> TriprResult<UserPreferences>;
}
