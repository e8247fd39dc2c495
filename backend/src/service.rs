//! Registry operations: register, login, email checks, deletes and listing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use registry_common::{PublicUser, UserCollection, UserRecord};
use tokio::sync::Mutex;

use crate::error::{RegistryError, Result};
use crate::store::{StoreError, UserStore};
use crate::validation::{self, emails_match, MIN_PASSWORD_LEN};

/// State guarded by the write lock.
struct WriterState {
    /// Highest id handed out by this process.
    last_id: i64,
}

/// Operation layer over a [`UserStore`].
///
/// Mutations hold a process-wide lock across their load, check and save so
/// concurrent requests cannot drop each other's writes. Reads are unlocked.
pub struct RegistryService {
    store: Arc<dyn UserStore>,
    writer: Mutex<WriterState>,
}

impl RegistryService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            writer: Mutex::new(WriterState { last_id: 0 }),
        }
    }

    /// Create a new account and return its public fields.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<PublicUser> {
        if validation::require_fields(&[username, email, password]).is_err() {
            return Err(RegistryError::validation("All fields are required"));
        }
        if !validation::valid_email_shape(email) {
            return Err(RegistryError::validation("Invalid email format"));
        }
        if !validation::valid_password_length(password) {
            return Err(RegistryError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let mut writer = self.writer.lock().await;
        let mut collection = self.load().await?;

        if validation::is_duplicate_email(&collection, email) {
            return Err(RegistryError::Conflict("Email already registered".to_string()));
        }

        let now = Utc::now();
        let id = next_id(&collection, writer.last_id, now).ok_or_else(|| {
            tracing::error!("No user id left above the largest stored id");
            RegistryError::Io("Failed to save user data".to_string())
        })?;
        let record = UserRecord {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            registered_at: now,
            extra: Default::default(),
        };
        let user = record.to_public();
        collection.users.push(record);

        self.save(&collection, "Failed to save user data").await?;
        writer.last_id = id;

        tracing::info!("New user registered: {}", email);
        Ok(user)
    }

    /// Check credentials. Passwords are compared as exact plaintext strings.
    pub async fn login(&self, email: &str, password: &str) -> Result<PublicUser> {
        if validation::require_fields(&[email, password]).is_err() {
            return Err(RegistryError::validation("Email and password are required"));
        }

        let collection = self.load().await?;
        let user = collection
            .users
            .iter()
            .find(|u| emails_match(&u.email, email))
            .ok_or_else(|| {
                RegistryError::NotFound(
                    "No account found with this email. Please register first.".to_string(),
                )
            })?;

        if user.password != password {
            return Err(RegistryError::Auth("Incorrect password".to_string()));
        }

        tracing::info!("User logged in: {}", email);
        Ok(user.to_public())
    }

    /// Whether an account exists for `email`. Absence is not an error.
    pub async fn check_email(&self, email: &str) -> Result<bool> {
        if validation::require_fields(&[email]).is_err() {
            return Err(RegistryError::validation("Email is required"));
        }

        let collection = self.load().await?;
        Ok(validation::is_duplicate_email(&collection, email))
    }

    /// Remove every account matching `email`; returns how many were removed.
    pub async fn delete_by_email(&self, email: &str) -> Result<usize> {
        let _writer = self.writer.lock().await;
        let mut collection = self.load().await?;

        let before = collection.len();
        collection.users.retain(|u| !emails_match(&u.email, email));
        let removed = before - collection.len();

        if removed == 0 {
            return Err(RegistryError::NotFound("User not found".to_string()));
        }

        self.save(&collection, "Failed to save user data").await?;
        tracing::info!("User deleted: {} ({} record(s))", email, removed);
        Ok(removed)
    }

    /// Replace the collection with an empty one.
    pub async fn clear_all(&self) -> Result<()> {
        let _writer = self.writer.lock().await;
        self.save(&UserCollection::new(), "Failed to clear user data").await?;
        tracing::info!("All users cleared");
        Ok(())
    }

    /// The full collection, plaintext passwords included.
    pub async fn list_all(&self) -> Result<UserCollection> {
        self.load().await
    }

    /// Where the backing store lives, for logs and health reports.
    pub fn store_location(&self) -> String {
        self.store.location()
    }

    async fn load(&self) -> Result<UserCollection> {
        self.store.load().await.map_err(|e| {
            tracing::error!("Error reading users from {}: {}", self.store.location(), e);
            match e {
                StoreError::Corrupt { .. } => {
                    RegistryError::CorruptStore("User data is corrupted".to_string())
                }
                _ => RegistryError::Io("Failed to read user data".to_string()),
            }
        })
    }

    async fn save(&self, collection: &UserCollection, failure: &str) -> Result<()> {
        self.store.save(collection).await.map_err(|e| {
            tracing::error!("Error writing users to {}: {}", self.store.location(), e);
            RegistryError::Io(failure.to_string())
        })
    }
}

/// Creation time in Unix milliseconds, bumped past every id already issued
/// or stored so ids stay unique when registrations share a millisecond.
/// `None` once the largest id is `i64::MAX`.
fn next_id(collection: &UserCollection, last_issued: i64, now: DateTime<Utc>) -> Option<i64> {
    let floor = collection
        .users
        .iter()
        .filter_map(|u| u.id.parse::<i64>().ok())
        .chain(std::iter::once(last_issued))
        .max()
        .unwrap_or(0);

    floor
        .checked_add(1)
        .map(|next| now.timestamp_millis().max(next))
}
