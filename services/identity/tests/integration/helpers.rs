use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use kiosk_identity::domain::repository::{ProfileRepository, UserRepository};
use kiosk_identity::domain::types::{Profile, ProfileChanges, User};
use kiosk_identity::error::IdentityServiceError;
use kiosk_identity::usecase::password::hash_password;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    /// user_ids for which an empty profile was created alongside the user.
    pub profiles_created: Arc<Mutex<Vec<Uuid>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            profiles_created: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution
    /// inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }

    pub fn profiles_handle(&self) -> Arc<Mutex<Vec<Uuid>>> {
        Arc::clone(&self.profiles_created)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, IdentityServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, IdentityServiceError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn create_with_profile(&self, user: &User) -> Result<(), IdentityServiceError> {
        self.users.lock().unwrap().push(user.clone());
        self.profiles_created.lock().unwrap().push(user.id);
        Ok(())
    }

    async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<(), IdentityServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            if let Some(first) = first_name {
                u.first_name = first.to_owned();
            }
            if let Some(last) = last_name {
                u.last_name = last.to_owned();
            }
            u.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Profile>, IdentityServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        user_id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<(), IdentityServiceError> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(p) = profiles.iter_mut().find(|p| p.user_id == user_id) {
            if let Some(name) = &changes.display_name {
                p.display_name = name.clone();
            }
            if let Some(bio) = &changes.bio {
                p.bio = bio.clone();
            }
            if let Some(location) = &changes.location {
                p.location = location.clone();
            }
            if let Some(avatar) = &changes.avatar {
                p.avatar = Some(avatar.clone());
            }
            p.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn test_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "user@example.com".to_owned(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: None,
        is_active: true,
        is_staff: false,
        is_superuser: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_profile(user_id: Uuid) -> Profile {
    let now = Utc::now();
    Profile {
        user_id,
        display_name: "ada".to_owned(),
        bio: String::new(),
        location: String::new(),
        avatar: None,
        created_at: now,
        updated_at: now,
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
