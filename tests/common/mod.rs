//! Common test utilities

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::util::ServiceExt;
use user_registry::api::{self, AppState};
use user_registry::{InMemoryUserStore, StoreError, User, UserId, UserStore};

/// Router backed by the given store
pub fn app_with(store: Arc<dyn UserStore>) -> Router {
    api::build_router(AppState::new(store))
}

/// POST a raw JSON body to /api/v1/users and decode the reply
pub async fn post_users(app: &Router, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Fresh in-memory store
pub fn memory_store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::new())
}

/// Which store operation should fail
#[derive(Debug, Clone, Copy)]
pub enum FailAt {
    FindByName,
    Create,
    FindById,
}

/// Store that works like the in-memory one except for a single failing step
pub struct FailingStore {
    inner: InMemoryUserStore,
    fail_at: FailAt,
}

impl FailingStore {
    pub fn new(fail_at: FailAt) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryUserStore::new(),
            fail_at,
        })
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        match self.fail_at {
            FailAt::FindByName => Err(StoreError::Unavailable("caboom".to_string())),
            _ => self.inner.find_by_name(name).await,
        }
    }

    async fn create(&self, name: &str) -> Result<UserId, StoreError> {
        match self.fail_at {
            FailAt::Create => Err(StoreError::Unavailable("caboom".to_string())),
            _ => self.inner.create(name).await,
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError> {
        match self.fail_at {
            FailAt::FindById => Err(StoreError::Unavailable("caboomsel".to_string())),
            _ => self.inner.find_by_id(id).await,
        }
    }
}

/// Serialises tests that truncate the shared database
static DB_LOCK: Mutex<()> = Mutex::new(());

/// Setup test database - apply the schema and truncate `users`.
///
/// Returns `None` when `DATABASE_URL` is not set, so Postgres-backed tests
/// are skipped on machines without a database.
pub async fn setup_test_db() -> Option<(PgPool, MutexGuard<'static, ()>)> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    sqlx::query(include_str!("../../migrations/0001_create_users.sql"))
        .execute(&pool)
        .await
        .expect("Failed to apply schema");

    // Clean up DB for fresh state
    sqlx::query("TRUNCATE TABLE users RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    Some((pool, guard))
}
