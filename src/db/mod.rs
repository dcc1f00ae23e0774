pub mod bookings;
pub mod items;
pub mod merchants;
pub mod moderators;
pub mod requests;
pub mod summary;
pub mod users;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Which credential level a store connects with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Browser-safe reads, subject to row-level security.
    Public,
    /// Privileged server-side access that bypasses row-level security.
    Service,
}

impl Access {
    pub fn as_str(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Service => "service",
        }
    }
}

/// A handle on the hosted database at one credential level.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool. Public pools switch every new connection to `role`
    /// when one is given, so row-level security applies to them.
    pub async fn connect(
        url: &str,
        access: Access,
        role: Option<String>,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let role = match access {
            Access::Public => role,
            Access::Service => None,
        };

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .after_connect(move |conn, _meta| {
                let role = role.clone();
                Box::pin(async move {
                    if let Some(role) = role {
                        let stmt = format!("SET ROLE \"{}\"", role.replace('"', "\"\""));
                        sqlx::query(&stmt).execute(&mut *conn).await?;
                    }
                    Ok(())
                })
            })
            .connect(url)
            .await?;

        tracing::info!("Connected {} store", access.as_str());
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
