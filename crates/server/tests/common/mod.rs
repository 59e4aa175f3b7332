use axum::{
    body::Body,
    extract,
    http::{header, Request, StatusCode},
    middleware, Router,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use tower::ServiceExt;

/// Tables to truncate before each test run (child tables before parents).
const ALL_TABLES: &str = "reclamations, activities, notifications, users";

/// One-time flag to ensure we only set up the test database once per process.
static INITIALIZED: OnceLock<()> = OnceLock::new();

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Set up the test database and override DATABASE_URL so all subsequent pool
/// creation uses the `_test` database instead of the main one.
async fn ensure_test_db() {
    let _ = dotenvy::dotenv();
    let original_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let (base_url, db_name) = original_url
        .rsplit_once('/')
        .expect("DATABASE_URL must contain a database name");
    let test_db_name = format!("{}_test", db_name);
    let test_url = format!("{}/{}", base_url, test_db_name);

    let admin_url = format!("{}/postgres", base_url);
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres admin database");

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&test_db_name)
            .fetch_one(&admin_pool)
            .await
            .expect("Failed to check for test database");

    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{}\"", test_db_name))
            .execute(&admin_pool)
            .await
            .expect("Failed to create test database");
    }

    admin_pool.close().await;

    std::env::set_var("DATABASE_URL", &test_url);
}

#[allow(dead_code)]
/// Build a pool connected to the test database.
/// On the first call, creates the database, runs migrations, and truncates all tables.
pub async fn test_pool() -> Pool<Postgres> {
    if INITIALIZED.get().is_none() {
        ensure_test_db().await;
    }

    let pool = server::db::create_pool();

    if INITIALIZED.set(()).is_ok() {
        server::db::run_migrations(&pool).await;

        sqlx::query(&format!("TRUNCATE {} CASCADE", ALL_TABLES))
            .execute(&pool)
            .await
            .expect("Failed to truncate test tables");
    }

    pool
}

#[allow(dead_code)]
/// Insert a user with a unique username and return its id.
pub async fn seed_user(pool: &Pool<Postgres>, prefix: &str) -> i64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let username = format!("{prefix}_{ts}_{n}");

    sqlx::query_scalar(
        "INSERT INTO users (username, display_name, email) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&username)
    .bind(format!("Test {username}"))
    .bind(format!("{username}@test.com"))
    .fetch_one(pool)
    .await
    .expect("Failed to seed user")
}

#[allow(dead_code)]
/// Insert a notification created `minutes_ago` minutes in the past.
pub async fn seed_notification(
    pool: &Pool<Postgres>,
    user_id: i64,
    title: &str,
    read: bool,
    minutes_ago: i32,
) -> uuid::Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO notifications (user_id, title, read, created_at)
        VALUES ($1, $2, $3, NOW() - make_interval(mins => $4))
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(read)
    .bind(minutes_ago)
    .fetch_one(pool)
    .await
    .expect("Failed to seed notification")
}

/// Echoes the subject of the claims the auth middleware attached, or `anonymous`.
async fn whoami(req: extract::Request) -> String {
    req.extensions()
        .get::<server::auth::jwt::Claims>()
        .map(|c| format!("{}:{}", c.sub, c.role))
        .unwrap_or_else(|| "anonymous".to_string())
}

#[allow(dead_code)]
/// Router with the auth middleware in front of a single `/whoami` route.
pub fn middleware_app() -> Router {
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
    Router::new()
        .route("/whoami", axum::routing::get(whoami))
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware))
}

#[allow(dead_code)]
/// GET `uri` with optional extra headers and return (status, body).
pub async fn get_with_headers(
    app: &Router,
    uri: &str,
    headers: &[(header::HeaderName, String)],
) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
