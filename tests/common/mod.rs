use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use krii_moderation::auth::password;
use krii_moderation::config::Config;
use krii_moderation::db::Store;

pub const SESSION_COOKIE: &str = "krii_session";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Insert a moderator with a bcrypt hash of `password`, return its id.
    pub async fn seed_moderator(
        &self,
        username: &str,
        password: &str,
        role: &str,
        is_active: bool,
    ) -> Uuid {
        let hash = password::hash(password).expect("hash failed");
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO moderators (username, password_hash, role, is_active)
             VALUES ($1, $2, $3, $4) RETURNING moderator_id",
        )
        .bind(username)
        .bind(hash)
        .bind(role)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await
        .expect("seed moderator failed")
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) {
        sqlx::query("UPDATE moderators SET is_active = $2 WHERE moderator_id = $1")
            .bind(id)
            .bind(is_active)
            .execute(&self.pool)
            .await
            .expect("update moderator failed");
    }

    pub async fn seed_user(&self, email: &str, first: Option<&str>, last: Option<&str>) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (email, first_name, last_name) VALUES ($1, $2, $3) RETURNING user_id",
        )
        .bind(email)
        .bind(first)
        .bind(last)
        .fetch_one(&self.pool)
        .await
        .expect("seed user failed")
    }

    pub async fn seed_item(&self, owner_id: Uuid, title: &str, status: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO items (owner_id, title, status) VALUES ($1, $2, $3) RETURNING item_id",
        )
        .bind(owner_id)
        .bind(title)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .expect("seed item failed")
    }

    pub async fn seed_request(
        &self,
        item_id: Option<Uuid>,
        borrower_id: Option<Uuid>,
        owner_id: Option<Uuid>,
        status: &str,
    ) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO rental_requests (item_id, borrower_id, owner_id, start_date, end_date, status)
             VALUES ($1, $2, $3, DATE '2025-03-01', DATE '2025-03-04', $4)
             RETURNING request_id",
        )
        .bind(item_id)
        .bind(borrower_id)
        .bind(owner_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .expect("seed request failed")
    }

    /// POST the JSON login endpoint, return body + status.
    pub async fn login_json(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(body)
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Sign in through the HTML form and return the session cookie value.
    pub async fn sign_in(&self, username: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("form login failed");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "form login did not redirect");
        session_cookie(&resp).expect("no session cookie set")
    }

    /// GET a page with the given session cookie, return status, location and body.
    pub async fn get_page(
        &self,
        path: &str,
        session: Option<&str>,
    ) -> (StatusCode, Option<String>, String) {
        let mut req = self.client.get(self.url(path));
        if let Some(value) = session {
            req = req.header("cookie", format!("{SESSION_COOKIE}={value}"));
        }
        let resp = req.send().await.expect("page request failed");
        let status = resp.status();
        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await.unwrap_or_default();
        (status, location, body)
    }
}

/// Value of the session cookie set by a response, if any.
pub fn session_cookie(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| {
            v.split(';')
                .next()
                .and_then(|pair| pair.trim().strip_prefix(&format!("{SESSION_COOKIE}=")))
                .map(str::to_string)
        })
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let db_name = format!("krii_test_{}", Uuid::new_v4().simple());

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url.clone(),
        public_database_url: test_url,
        public_role: None,
        session_secret: "test-session-secret-long-enough".to_string(),
        session_ttl_hours: 1,
        secure_cookies: false,
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        run_migrations: false,
        log_level: "warn".to_string(),
    };

    let app = krii_moderation::build_app(
        Store::new(pool.clone()),
        Store::new(pool.clone()),
        config,
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
