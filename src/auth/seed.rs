//! Out-of-band moderator provisioning: the dashboard never creates accounts,
//! so new moderators are inserted by hand with a hash produced here.

use crate::auth::password;
use crate::models::Role;

/// A moderator row ready to be inserted, with its password already hashed.
#[derive(Debug, Clone)]
pub struct ModeratorSeed {
    pub username: String,
    pub role: Role,
    pub password_hash: String,
}

impl ModeratorSeed {
    pub fn new(username: &str, role: Role, password: &str) -> Result<Self, String> {
        if username.is_empty() {
            return Err("Username must not be empty".to_string());
        }
        if password.is_empty() {
            return Err("Password must not be empty".to_string());
        }

        Ok(Self {
            username: username.to_string(),
            role,
            password_hash: password::hash(password)?,
        })
    }

    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO moderators (username, password_hash, role) VALUES ({}, {}, {});",
            sql_literal(&self.username),
            sql_literal(&self.password_hash),
            sql_literal(self.role.as_str()),
        )
    }

    /// What the `hash_password` tool prints.
    pub fn report(&self) -> String {
        format!(
            "Hash: {}\n\nUse this hash in your SQL INSERT statement:\n{}\n",
            self.password_hash,
            self.insert_statement()
        )
    }
}

fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
