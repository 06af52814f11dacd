//! Todo API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::application::use_cases::todos::{
    CreateTodoUseCase, DeleteTodoUseCase, ListScope, ListTodosUseCase, UpdateTodoUseCase,
};
use todo_api::domain::gateways::{IdentityVerifier, TodoRepository};
use todo_api::infrastructure::driven_adapters::config::AppConfig;
use todo_api::infrastructure::driven_adapters::database::create_pool;
use todo_api::infrastructure::driven_adapters::identity::JwksIdentityVerifier;
use todo_api::infrastructure::driven_adapters::todo_repository::PostgresTodoRepository;
use todo_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside development
    dotenvy::dotenv().ok();

    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    if config.todos.list_scope == ListScope::All {
        tracing::warn!("todos.list_scope = all: every authenticated caller can list every user's todos");
    }

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!(host = %config.database.host, "Database connection pool created");

    // Create adapters
    let todo_repository: Arc<dyn TodoRepository> = Arc::new(PostgresTodoRepository::new(pool));
    let identity_verifier: Arc<dyn IdentityVerifier> =
        Arc::new(JwksIdentityVerifier::from_config(&config.auth)?);

    // Create use cases
    let list_todos_use_case = Arc::new(ListTodosUseCase::new(
        todo_repository.clone(),
        config.todos.list_scope,
    ));
    let create_todo_use_case = Arc::new(CreateTodoUseCase::new(todo_repository.clone()));
    let update_todo_use_case = Arc::new(UpdateTodoUseCase::new(todo_repository.clone()));
    let delete_todo_use_case = Arc::new(DeleteTodoUseCase::new(todo_repository));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state
    let app_state = AppState {
        config: Arc::new(config),
        identity_verifier,
        list_todos_use_case,
        create_todo_use_case,
        update_todo_use_case,
        delete_todo_use_case,
    };

    let app = build_router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
