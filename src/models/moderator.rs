use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of moderator roles, stored as `admin` / `moderator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
}

/// Things a role may be allowed to do beyond viewing the dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ManageModerators,
    AdminSettings,
}

impl Role {
    pub fn allows(self, capability: Capability) -> bool {
        match self {
            Role::Admin => true,
            Role::Moderator => match capability {
                Capability::ManageModerators | Capability::AdminSettings => false,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct UnknownRole(pub String);

impl std::fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown moderator role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A full `moderators` row. Only the login flow ever reads the hash.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Moderator {
    pub moderator_id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl Moderator {
    pub fn into_profile(self) -> ModeratorProfile {
        ModeratorProfile {
            moderator_id: self.moderator_id,
            username: self.username,
            role: self.role,
            is_active: self.is_active,
            last_login: self.last_login,
        }
    }
}

/// The public fields of a moderator: what the login endpoint returns and
/// what a session caches.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct ModeratorProfile {
    pub moderator_id: Uuid,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl ModeratorProfile {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.allows(capability)
    }

    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
