//! Content Studio Backend
//!
//! REST backend for a content-generation app: in-memory projects and versioned
//! content files, bearer-token auth, and an LLM text-generation gateway.

mod api;
mod auth;
mod config;
mod errors;
mod generation;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::AuthService;
use config::Config;
use generation::{Generator, LlmClient};
use store::{ContentStore, ProjectStore, UserStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectStore>,
    pub content: Arc<ContentStore>,
    pub auth: Arc<AuthService>,
    pub generator: Arc<Generator>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build empty stores and services from configuration.
    pub fn from_config(config: Config) -> Result<Self, generation::ProviderError> {
        let users = Arc::new(UserStore::new());
        let auth = Arc::new(AuthService::new(users, config.jwt.clone()));
        let generator = Arc::new(Generator::new(LlmClient::new(&config.llm)?));

        Ok(Self {
            projects: Arc::new(ProjectStore::new()),
            content: Arc::new(ContentStore::new()),
            auth,
            generator,
            config: Arc::new(config),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Content Studio Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Text-generation model: {}", config.llm.model);
    tracing::info!(
        projects = config.require_auth.projects,
        content = config.require_auth.content,
        generation = config.require_auth.generation,
        "Bearer auth required per route group"
    );

    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET is not set. Tokens are signed with the development secret!");
    }
    if config.llm.api_token.is_none() {
        tracing::warn!("HUGGINGFACE_API_TOKEN is not set. Generation calls are unauthenticated.");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::from_config(config)?;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let require = state.config.require_auth;
    let gate = |enabled: bool| enabled.then(|| state.auth.clone());

    // Accounts (always open; /me checks its own token)
    let account_routes = Router::new()
        .route("/register", post(api::register))
        .route("/login", post(api::login))
        .route("/me", get(api::current_user));

    // Generation
    let generation_gate = gate(require.generation);
    let generation_routes = Router::new()
        .route("/generate", post(api::generate))
        .route("/generate-short", post(api::generate_short))
        .route("/analyze", post(api::analyze))
        .layer(middleware::from_fn(move |req, next| {
            auth::bearer_auth_layer(generation_gate.clone(), req, next)
        }));

    // Projects
    let projects_gate = gate(require.projects);
    let project_routes = Router::new()
        .route(
            "/projects",
            get(api::list_projects).post(api::create_project),
        )
        .route("/projects/bulk-update-status", post(api::bulk_update_status))
        .route("/projects/bulk-delete", post(api::bulk_delete_projects))
        .route(
            "/projects/{id}",
            get(api::get_project)
                .put(api::update_project)
                .delete(api::delete_project),
        )
        .route("/projects/{id}/archive", post(api::archive_project))
        .route("/projects/{id}/unarchive", post(api::unarchive_project))
        .route("/projects/{id}/duplicate", post(api::duplicate_project))
        .route("/projects/{id}/content", get(api::list_project_content))
        .layer(middleware::from_fn(move |req, next| {
            auth::bearer_auth_layer(projects_gate.clone(), req, next)
        }));

    // Content files
    let content_gate = gate(require.content);
    let content_routes = Router::new()
        .route("/content", post(api::create_content))
        .route(
            "/content/{id}",
            get(api::get_content).put(api::update_content),
        )
        .route("/content/{id}/versions", get(api::list_content_versions))
        .layer(middleware::from_fn(move |req, next| {
            auth::bearer_auth_layer(content_gate.clone(), req, next)
        }));

    let api_routes = Router::new()
        .merge(account_routes)
        .merge(generation_routes)
        .merge(project_routes)
        .merge(content_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
