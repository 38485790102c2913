//! Seeded user directory

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use crate::{
    error::{AppError, AppResult},
    models::user::{AccessLevel, UserAccount},
};

/// One entry of the fixed demo account set
pub struct SeedAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub employee_id: Option<&'static str>,
    pub member_id: Option<&'static str>,
    pub access_level: AccessLevel,
}

/// The demo account set. Only argon2 hashes of these passwords are stored.
pub const SEED_ACCOUNTS: [SeedAccount; 5] = [
    SeedAccount {
        username: "admin",
        password: "admin2025",
        role: "System Administrator",
        name: "Emily Rodriguez",
        email: "admin@modernlibrary.edu",
        employee_id: Some("ADM001"),
        member_id: None,
        access_level: AccessLevel::Full,
    },
    SeedAccount {
        username: "librarian",
        password: "lib123",
        role: "Senior Librarian",
        name: "David Thompson",
        email: "david.thompson@modernlibrary.edu",
        employee_id: Some("LIB002"),
        member_id: None,
        access_level: AccessLevel::High,
    },
    SeedAccount {
        username: "student",
        password: "student456",
        role: "Graduate Student",
        name: "Maya Patel",
        email: "maya.patel@university.edu",
        employee_id: None,
        member_id: Some("GRD2024001"),
        access_level: AccessLevel::Standard,
    },
    SeedAccount {
        username: "faculty",
        password: "faculty789",
        role: "Research Faculty",
        name: "Prof. James Wilson",
        email: "j.wilson@university.edu",
        employee_id: None,
        member_id: Some("FAC2024001"),
        access_level: AccessLevel::Extended,
    },
    SeedAccount {
        username: "researcher",
        password: "research2024",
        role: "Research Scholar",
        name: "Dr. Lisa Chang",
        email: "lisa.chang@research.edu",
        employee_id: None,
        member_id: Some("RES2024001"),
        access_level: AccessLevel::Research,
    },
];

/// Username → account map, seeded at startup.
///
/// Read-mostly: the only write after seeding is the last-login touch.
/// Insertion order is preserved so listings stay stable across requests.
#[derive(Clone)]
pub struct UserDirectory {
    accounts: Arc<RwLock<IndexMap<String, UserAccount>>>,
}

impl UserDirectory {
    /// Build the directory from the seed set, hashing each password
    pub fn seeded() -> AppResult<Self> {
        let mut accounts = IndexMap::with_capacity(SEED_ACCOUNTS.len());
        for seed in &SEED_ACCOUNTS {
            accounts.insert(
                seed.username.to_string(),
                UserAccount {
                    username: seed.username.to_string(),
                    password_hash: hash_password(seed.password)?,
                    role: seed.role.to_string(),
                    name: seed.name.to_string(),
                    email: seed.email.to_string(),
                    employee_id: seed.employee_id.map(String::from),
                    member_id: seed.member_id.map(String::from),
                    last_login: None,
                    access_level: seed.access_level,
                },
            );
        }
        Ok(Self {
            accounts: Arc::new(RwLock::new(accounts)),
        })
    }

    /// Look up an account by username
    pub fn get(&self, username: &str) -> Option<UserAccount> {
        self.read().get(username).cloned()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.read().contains_key(username)
    }

    /// Record a successful login on the account
    pub fn touch_login(&self, username: &str, when: DateTime<Utc>) {
        if let Some(account) = self.write().get_mut(username) {
            account.last_login = Some(when);
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Accounts that have logged in at least once
    pub fn active_count(&self) -> usize {
        self.read()
            .values()
            .filter(|account| account.last_login.is_some())
            .count()
    }

    /// Distinct access levels present in the directory, in seed order
    pub fn access_levels(&self) -> Vec<AccessLevel> {
        let mut levels = Vec::new();
        for account in self.read().values() {
            if !levels.contains(&account.access_level) {
                levels.push(account.access_level);
            }
        }
        levels
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, IndexMap<String, UserAccount>> {
        self.accounts
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, IndexMap<String, UserAccount>> {
        self.accounts
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash seed password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn seeds_all_demo_accounts() {
        let directory = UserDirectory::seeded().unwrap();
        assert_eq!(directory.len(), 5);
        for seed in &SEED_ACCOUNTS {
            let account = directory.get(seed.username).expect("seed account missing");
            assert_eq!(account.access_level, seed.access_level);
            assert!(account.last_login.is_none());
            assert_ne!(account.password_hash, seed.password);
        }
    }

    #[test]
    fn touch_login_marks_account_active() {
        let directory = UserDirectory::seeded().unwrap();
        assert_eq!(directory.active_count(), 0);

        directory.touch_login("student", Utc::now());
        assert_eq!(directory.active_count(), 1);
        assert!(directory.get("student").unwrap().last_login.is_some());
    }

    #[test]
    fn access_levels_are_distinct_and_in_seed_order() {
        let directory = UserDirectory::seeded().unwrap();
        let levels = directory.access_levels();
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0], AccessLevel::Full);
        assert_eq!(levels[4], AccessLevel::Research);
    }
}
