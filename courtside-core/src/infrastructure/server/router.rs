use super::docs::ApiDoc;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::agent::TurnOrchestrator;
use crate::config::ServerConfig;
use crate::model::ModelProvider;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Build the application router. Exposed so callers can mount it on their own
/// listener.
pub fn router<P>(orchestrator: Arc<TurnOrchestrator<P>>, cors_origins: &[String]) -> Router
where
    P: ModelProvider + 'static,
{
    let state = Arc::new(ServerState::new(orchestrator));
    let app = Router::new()
        .route("/api/chat", post(routes::chat::chat_handler::<P>))
        .route("/api/tools", get(routes::tools::tools_handler::<P>))
        .layer(cors_layer(cors_origins))
        .with_state(state);
    with_docs(app)
}

#[cfg(feature = "swagger-ui")]
fn with_docs(app: Router) -> Router {
    use utoipa_swagger_ui::SwaggerUi;
    app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
}

#[cfg(not(feature = "swagger-ui"))]
fn with_docs(app: Router) -> Router {
    let api = ApiDoc::openapi();
    app.route(
        "/api-doc/openapi.json",
        get(move || {
            let api = api.clone();
            async move { axum::Json(api) }
        }),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub(super) async fn serve<P>(
    orchestrator: Arc<TurnOrchestrator<P>>,
    config: &ServerConfig,
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    let addr = config.bind;
    info!(%addr, "Binding REST server");
    let app = router(orchestrator, &config.cors_origins);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(err) => {
            warn!(%err, "Could not listen for ctrl-c; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
