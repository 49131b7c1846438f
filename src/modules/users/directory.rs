//! In-memory identity directory.
//!
//! Stands in for the external identity store (registration, credential
//! management, role assignment live elsewhere). The server only consumes
//! identities: credential check at login, lookup by subject id afterwards.
//! The directory is seeded once at startup and read-only from then on, so it
//! is shared across requests without locking.

use opsdesk_models::users::{User, UserRole};
use uuid::Uuid;

use crate::utils::password::hash_password;

/// Well-known sample identities (ids are stable for tests and demos).
pub mod sample {
    use uuid::Uuid;

    pub const ADMIN_ID: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000001);
    pub const MANAGER_ID: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000002);
    pub const USER_ID: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000003);

    pub const ADMIN_EMAIL: &str = "ify.admin@opsdesk.test";
    pub const MANAGER_EMAIL: &str = "tayo.manager@opsdesk.test";
    pub const USER_EMAIL: &str = "chidi.user@opsdesk.test";

    /// Shared demo password for all seeded identities.
    pub const PASSWORD: &str = "password123";
}

/// A directory entry: the public identity plus its credential hash.
#[derive(Debug, Clone)]
pub struct DirectoryRecord {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Default)]
pub struct UserDirectory {
    records: Vec<DirectoryRecord>,
}

impl UserDirectory {
    pub fn new(records: Vec<DirectoryRecord>) -> Self {
        Self { records }
    }

    /// Builds the demo directory: one identity per role.
    ///
    /// Hashing happens here rather than at compile time so the stored hashes
    /// go through the same bcrypt path as a real credential store would.
    pub fn with_sample_users() -> Self {
        let seed = [
            (sample::ADMIN_ID, "Ify Nwosu", sample::ADMIN_EMAIL, UserRole::Admin),
            (
                sample::MANAGER_ID,
                "Tayo Adeyemi",
                sample::MANAGER_EMAIL,
                UserRole::Manager,
            ),
            (sample::USER_ID, "Chidi Okeke", sample::USER_EMAIL, UserRole::User),
        ];

        let password_hash = hash_password(sample::PASSWORD)
            .expect("bcrypt hashing of the seed password cannot fail");

        let records = seed
            .into_iter()
            .map(|(id, name, email, role)| DirectoryRecord {
                user: User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    role,
                },
                password_hash: password_hash.clone(),
            })
            .collect();

        Self::new(records)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&DirectoryRecord> {
        self.records.iter().find(|r| r.user.email == email)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.records
            .iter()
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone())
    }

    /// Every identity, without credential material.
    pub fn users(&self) -> Vec<User> {
        self.records.iter().map(|r| r.user.clone()).collect()
    }
}
