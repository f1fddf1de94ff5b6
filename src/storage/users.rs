//! User records in PostgreSQL
//!
//! Connection-per-call: every insert opens its own connection and closes it
//! whatever the outcome. Failures are logged and reported as `false`.

use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::core::config::{ConfigError, StoreConfig};

const INSERT_USER_SQL: &str = "INSERT INTO users (username, email, price) VALUES ($1, $2, $3)";

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    /// Bound as float8; Postgres casts it to the `numeric` column on insert
    pub price: f64,
}

/// Write-only access to the `users` table
#[derive(Debug, Clone)]
pub struct UserStore {
    options: PgConnectOptions,
}

impl UserStore {
    /// Builds the store from configuration. A password is mandatory.
    pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
        let password = config.password.as_ref().ok_or(ConfigError::Missing("DB_PASSWORD"))?;

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(password.expose_secret())
            .database(&config.database);

        Ok(Self { options })
    }

    /// Inserts a user.
    ///
    /// # Returns
    /// `true` when the row was committed, `false` on any connection or query error.
    pub async fn add_user(&self, user: &UserRecord) -> bool {
        match self.try_add_user(user).await {
            Ok(()) => {
                log::info!("✅ User {} added", user.username);
                true
            }
            Err(e) => {
                log::error!("Failed to add user {}: {}", user.username, e);
                false
            }
        }
    }

    async fn try_add_user(&self, user: &UserRecord) -> Result<(), sqlx::Error> {
        let mut conn = PgConnection::connect_with(&self.options).await?;

        let result = insert_user(&mut conn, user).await;

        if let Err(e) = conn.close().await {
            log::warn!("Failed to close database connection: {}", e);
        }

        result
    }
}

async fn insert_user(conn: &mut PgConnection, user: &UserRecord) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;

    sqlx::query(INSERT_USER_SQL)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.price)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn store_config(password: Option<&str>, port: u16) -> StoreConfig {
        StoreConfig {
            host: "127.0.0.1".to_string(),
            port,
            user: "postgres".to_string(),
            database: "CentralDB".to_string(),
            password: password.map(|p| SecretString::from(p.to_string())),
        }
    }

    #[test]
    fn test_password_is_required() {
        let err = UserStore::from_config(&store_config(None, 5432)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_PASSWORD")));
    }

    #[tokio::test]
    async fn test_unreachable_database_returns_false() {
        // Nothing listens on port 1
        let store = UserStore::from_config(&store_config(Some("secret"), 1)).unwrap();
        let user = UserRecord {
            username: "ivan".to_string(),
            email: "ivan@example.com".to_string(),
            price: 199.99,
        };

        assert!(!store.add_user(&user).await);
    }
}
