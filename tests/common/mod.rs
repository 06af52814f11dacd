//! Common test utilities for e2e tests
//!
//! Provides a static identity verifier, an in-memory repository, a
//! PostgreSQL container harness and request helpers shared by the
//! integration test binaries.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use todo_api::application::use_cases::todos::{
    CreateTodoUseCase, DeleteTodoUseCase, ListScope, ListTodosUseCase, UpdateTodoUseCase,
};
use todo_api::domain::gateways::{IdentityVerifier, TodoRepository};
use todo_api::domain::models::todo::{NewTodo, SubjectId, Todo, TodoChanges, TodoId};
use todo_api::infrastructure::driven_adapters::config::AppConfig;
use todo_api::infrastructure::driven_adapters::todo_repository::PostgresTodoRepository;
use todo_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};
use todo_api::shared::errors::{AuthError, RepositoryError};

pub const ALICE_TOKEN: &str = "token-alice";
pub const BOB_TOKEN: &str = "token-bob";
pub const ALICE: &str = "auth0|alice";
pub const BOB: &str = "auth0|bob";

/// Database password used by the test configuration
pub const TEST_DB_PASSWORD: &str = "super-secret-db-password";

/// Verifier that accepts a fixed set of opaque tokens
pub struct StaticIdentityVerifier {
    subjects: HashMap<String, String>,
}

impl Default for StaticIdentityVerifier {
    fn default() -> Self {
        let subjects = [(ALICE_TOKEN, ALICE), (BOB_TOKEN, BOB)]
            .into_iter()
            .map(|(t, s)| (t.to_string(), s.to_string()))
            .collect();
        Self { subjects }
    }
}

#[async_trait]
impl IdentityVerifier for StaticIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<SubjectId, AuthError> {
        self.subjects
            .get(token)
            .map(SubjectId::new)
            .ok_or(AuthError::InvalidToken)
    }
}

/// Repository keeping rows in memory and counting every call
#[derive(Default)]
pub struct InMemoryTodoRepository {
    rows: Mutex<Vec<Todo>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryTodoRepository {
    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail like a lost connection
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Snapshot of the stored rows
    pub fn rows(&self) -> Vec<Todo> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn find_by_owner(&self, owner: &SubjectId) -> Result<Vec<Todo>, RepositoryError> {
        self.enter()?;
        Ok(self.rows().into_iter().filter(|t| t.user_id() == owner).collect())
    }

    async fn create(&self, todo: &NewTodo) -> Result<Todo, RepositoryError> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Todo::restore(TodoId::from(id), todo.title.clone(), false, todo.owner.clone());
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_owned(
        &self,
        id: TodoId,
        owner: &SubjectId,
        changes: &TodoChanges,
    ) -> Result<bool, RepositoryError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|t| t.id() == id && t.user_id() == owner) {
            Some(row) => {
                *row = Todo::restore(id, changes.title.clone(), changes.completed, owner.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_owned(&self, id: TodoId, owner: &SubjectId) -> Result<bool, RepositoryError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| !(t.id() == id && t.user_id() == owner));
        Ok(rows.len() < before)
    }
}

/// Create a test configuration
pub fn test_config(list_scope: ListScope) -> AppConfig {
    use config::{Config, File, FileFormat};

    let scope = match list_scope {
        ListScope::All => "all",
        ListScope::Owner => "owner",
    };

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[database]
host = "db.test.internal"
port = 5432
user = "todo_user"
password = "{TEST_DB_PASSWORD}"
name = "todos_test"
max_connections = 5
min_connections = 1

[auth]
domain = "tenant.example.com"
audience = "https://todo-api.test"
jwks_requests_per_minute = 5
jwks_timeout_secs = 5

[todos]
list_scope = "{scope}"
"#
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Wire a router around any repository with the static verifier
pub fn build_app(repository: Arc<dyn TodoRepository>, list_scope: ListScope) -> Router {
    let config = test_config(list_scope);

    let app_state = AppState {
        list_todos_use_case: Arc::new(ListTodosUseCase::new(repository.clone(), config.todos.list_scope)),
        create_todo_use_case: Arc::new(CreateTodoUseCase::new(repository.clone())),
        update_todo_use_case: Arc::new(UpdateTodoUseCase::new(repository.clone())),
        delete_todo_use_case: Arc::new(DeleteTodoUseCase::new(repository)),
        identity_verifier: Arc::new(StaticIdentityVerifier::default()),
        config: Arc::new(config),
    };

    build_router(app_state)
}

/// Send one request through the router and collect the response
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Test application backed by a real PostgreSQL container
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new(list_scope: ListScope) -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::raw_sql(include_str!("../fixtures/schema.sql"))
            .execute(&pool)
            .await
            .expect("Failed to create schema");

        let repository = Arc::new(PostgresTodoRepository::new(pool.clone()));
        let router = build_app(repository, list_scope);

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Owner column of a stored row, read straight from the table
    pub async fn stored_owner(&self, id: i64) -> Option<String> {
        sqlx::query_scalar::<_, String>("SELECT user_id FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .expect("Failed to read todo owner")
    }
}

/// Create response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct CreatedTodo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// List item structure for deserialization
#[derive(Debug, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub user_id: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
