use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use std::net::SocketAddr;
use stk_portal::config::PortalConfig;
use stk_portal::infrastructure::{database, storage};
use stk_portal::{AppState, create_app};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Read everything from the environment
    Env,
    /// Environment plus the built-in demo admin
    Development,
    /// Environment with a mandatory JWT secret
    Production,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port for the API server
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Configuration profile
    #[arg(long, value_enum, default_value_t = Profile::Env)]
    profile: Profile,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initial Environment & Logging Setup
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stk_portal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting STK Portal [Profile: {:?}]...", args.profile);

    let config = match args.profile {
        Profile::Env => PortalConfig::from_env(),
        Profile::Development => PortalConfig {
            demo_admin: PortalConfig::development().demo_admin,
            ..PortalConfig::from_env()
        },
        Profile::Production => PortalConfig::production(),
    };
    info!(
        "🛡️  Portal Config: Max Size={}MB, Session TTL={}h, Demo Admin={}",
        config.max_file_size / 1024 / 1024,
        config.session_ttl_hours,
        config.demo_admin.is_some()
    );

    // 2. Setup Infrastructure
    let db = database::setup_database().await?;
    let storage_service = storage::setup_storage(&config.storage_public_url).await;

    let state = AppState::new(db, storage_service, config);

    // Configure tracing layer for HTTP requests
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::http::Request<_>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        })
        .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
            info!("📥 {} {}", request.method(), request.uri());
        })
        .on_response(
            |response: &axum::http::Response<_>,
             latency: std::time::Duration,
             _span: &tracing::Span| {
                info!(
                    "📤 Finished in {:?} with status {}",
                    latency,
                    response.status()
                );
            },
        );

    let app = create_app(state).layer(trace_layer);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("✅ API Server listening on: http://0.0.0.0:{}", args.port);
    info!(
        "📖 Swagger UI documentation: http://localhost:{}/swagger-ui",
        args.port
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Server runtime error: {}", e);
    }

    info!("👋 Portal exited cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("⌨️  Ctrl+C received, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("💤 SIGTERM received, initiating graceful shutdown...");
        },
    }
}
