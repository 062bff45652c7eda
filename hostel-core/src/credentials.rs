//! User accounts and password checks

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::error::{HostelError, Result};
use crate::policy::Role;
use crate::records::{require, NewUser, Record, RecordId, User};
use crate::repository::Collection;
use crate::store::{Filter, SharedStore, UniqueIndex};

const USER_ID_LENGTH: usize = 6;
const USER_ID_ATTEMPTS: usize = 10;

#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: Collection<User>,
    bcrypt_cost: u32,
}

impl CredentialStore {
    /// Register the unique indexes on users and return the store
    pub async fn open(store: SharedStore, bcrypt_cost: u32) -> Result<Self> {
        for field in ["email", "userId"] {
            store
                .ensure_unique_index(UniqueIndex::new(User::COLLECTION, field))
                .await?;
        }
        Ok(Self {
            users: Collection::new(store),
            bcrypt_cost,
        })
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email, role = %new_user.role))]
    pub async fn register(&self, new_user: NewUser) -> Result<User> {
        require("name", &new_user.name)?;
        require("email", &new_user.email)?;
        require("password", &new_user.password)?;
        let email = new_user.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(HostelError::InvalidInput(format!(
                "{email} is not an email address"
            )));
        }

        if new_user.role == Role::Admin
            && self
                .users
                .find_one(&Filter::all().eq("role", Role::Admin.as_str()))
                .await?
                .is_some()
        {
            warn!("Rejected registration of a second admin account");
            return Err(HostelError::DuplicateKey(
                "an admin account already exists".into(),
            ));
        }

        let user_id = match new_user.user_id.as_deref().map(str::trim) {
            Some(user_id) if !user_id.is_empty() => user_id.to_string(),
            _ => self.generate_user_id().await?,
        };

        let password_hash = hash_password(new_user.password, self.bcrypt_cost).await?;
        let user = User {
            id: RecordId::new(),
            user_id,
            name: new_user.name.trim().to_string(),
            email,
            role: new_user.role,
            password_hash,
            created_at: Utc::now(),
        };
        // Email and userId collisions are rejected by the unique indexes
        self.users.create(&user).await?;
        info!("Registered {} as {}", user.user_id, user.role);
        Ok(user)
    }

    /// Check a password for a user identified by email or userId
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, identifier: &str, password: &str) -> Result<User> {
        let identifier = identifier.trim();
        let filter = if identifier.contains('@') {
            Filter::all().eq("email", identifier.to_lowercase())
        } else {
            Filter::all().eq("userId", identifier)
        };

        let Some(user) = self.users.find_one(&filter).await? else {
            warn!("Login attempt for unknown user");
            return Err(HostelError::InvalidCredentials);
        };

        let hash = user.password_hash.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| HostelError::Storage(format!("Password check failed: {e}")))?
            .unwrap_or(false);

        if matches {
            Ok(user)
        } else {
            warn!("Wrong password for {}", user.user_id);
            Err(HostelError::InvalidCredentials)
        }
    }

    pub async fn get(&self, user_id: &str) -> Result<User> {
        crate::repository::find_user(&self.users, user_id).await
    }

    /// Every account, oldest first
    pub async fn list(&self) -> Result<Vec<User>> {
        let mut users = self.users.list(&Filter::all()).await?;
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    async fn generate_user_id(&self) -> Result<String> {
        for _ in 0..USER_ID_ATTEMPTS {
            let candidate: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(USER_ID_LENGTH)
                .map(char::from)
                .collect();
            if self
                .users
                .find_one(&Filter::all().eq("userId", candidate.as_str()))
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }
        Err(HostelError::Conflict(
            "could not allocate a unique user id".into(),
        ))
    }
}

async fn hash_password(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| HostelError::Storage(format!("Password hashing failed: {e}")))?
        .map_err(|e| HostelError::InvalidInput(format!("Password could not be hashed: {e}")))
}
