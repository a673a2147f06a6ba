use crate::StoreError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use torii_core::repository::ProfileStore;
use torii_shared::User;

/// Fixed storage key for the serialized profile
const PROFILE_KEY: &str = "torii.profile.v1";

/// Profile persistence backed by one JSON file.
///
/// The whole serialized user is rewritten on every mutation and removed on
/// logout. Read failures are absorbed: a missing or corrupt file just
/// starts the session logged out.
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", PROFILE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn load(&self) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Box::new(StoreError::Io(err))),
        };

        match serde_json::from_slice(&bytes) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding unreadable profile");
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(StoreError::Io)?;
        }
        let bytes = serde_json::to_vec_pretty(user).map_err(StoreError::Serde)?;
        fs::write(&self.path, bytes).await.map_err(StoreError::Io)?;
        tracing::debug!(path = %self.path.display(), "profile persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Box::new(StoreError::Io(err))),
        }
    }
}

/// Profile store held entirely in memory, for tests and ephemeral sessions
pub struct MemoryProfileStore {
    slot: Mutex<Option<User>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.slot.lock().expect("profile slot poisoned").clone())
    }

    async fn save(&self, user: &User) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.slot.lock().expect("profile slot poisoned") = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.slot.lock().expect("profile slot poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torii_shared::UserRole;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("torii-store-test-{}", Uuid::new_v4()))
    }

    fn demo_user() -> User {
        let mut user = User::new(
            "Demo Buyer".to_string(),
            "demo@torii.example".to_string(),
            UserRole::Buyer,
        );
        user.favorites.push(Uuid::new_v4());
        user
    }

    #[tokio::test]
    async fn test_save_load_clear_round_trip() {
        let dir = scratch_dir();
        let store = JsonProfileStore::new(&dir);

        assert!(store.load().await.expect("load").is_none());

        let user = demo_user();
        store.save(&user).await.expect("save");
        let loaded = store.load().await.expect("load").expect("profile present");
        assert_eq!(loaded, user);

        store.clear().await.expect("clear");
        assert!(store.load().await.expect("load").is_none());

        // Clearing twice is fine
        store.clear().await.expect("second clear");
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_corrupt_profile_is_discarded() {
        let dir = scratch_dir();
        let store = JsonProfileStore::new(&dir);

        tokio::fs::create_dir_all(&dir).await.expect("mkdir");
        tokio::fs::write(store.path(), b"{ not json")
            .await
            .expect("write garbage");

        assert!(store.load().await.expect("load").is_none());
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_profile() {
        let dir = scratch_dir();
        let store = JsonProfileStore::new(&dir);

        let mut user = demo_user();
        store.save(&user).await.expect("save");

        user.cart.push(Uuid::new_v4());
        store.save(&user).await.expect("overwrite");

        let loaded = store.load().await.expect("load").expect("profile present");
        assert_eq!(loaded.cart.len(), 1);
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
