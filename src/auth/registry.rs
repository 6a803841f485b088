use serde::Serialize;

use crate::auth::password::hash_password;

/// A login principal. The registry is seeded once at startup and never
/// changes afterwards; there is no signup or account management.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
}

/// In-memory, read-only table of demo users.
#[derive(Debug)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// The demo account shipped with the service. Passwords are hashed at
    /// seed time so login always compares against an argon2 hash.
    pub fn seeded() -> anyhow::Result<Self> {
        let users = vec![User {
            id: 1,
            email: "demo@anahuac.mx".into(),
            password_hash: hash_password("demo123")?,
            name: "Usuario Demo".into(),
        }];
        Ok(Self { users })
    }

    #[cfg(test)]
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn seeded_registry_resolves_demo_user() {
        let registry = UserRegistry::seeded().expect("seed");
        let user = registry.find_by_email("demo@anahuac.mx").expect("demo user");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Usuario Demo");
        assert!(verify_password("demo123", &user.password_hash).expect("verify"));
    }

    #[test]
    fn unknown_email_is_none() {
        let registry = UserRegistry::seeded().expect("seed");
        assert!(registry.find_by_email("nadie@anahuac.mx").is_none());
    }

    #[test]
    fn password_is_not_serialized() {
        let registry = UserRegistry::seeded().expect("seed");
        let user = registry.find_by_email("demo@anahuac.mx").expect("demo user");
        let json = serde_json::to_string(user).expect("serialize");
        assert!(!json.contains("password"));
        assert!(json.contains("demo@anahuac.mx"));
    }
}
