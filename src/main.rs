use chatme_core::application::{
    ports::{
        notification::Notifier,
        security::{PasswordHasher, TokenService},
        time::Clock,
    },
    services::ApplicationServices,
};
use chatme_core::config::AppConfig;
use chatme_core::domain::{
    post::PostRepository, social::FriendDirectory, user::CredentialStore,
};
use chatme_core::infrastructure::{
    database,
    notification::NotificationHub,
    repositories::{
        BoundedCredentialStore, BoundedFriendDirectory, BoundedPostRepository,
        InMemoryCredentialStore, InMemoryFriendDirectory, InMemoryPostRepository,
        PostgresCredentialStore, PostgresFriendDirectory, PostgresPostRepository,
    },
    security::{password::Argon2PasswordHasher, token::HmacTokenService},
    time::SystemClock,
};
use chatme_core::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{CookieSettings, HttpState},
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Stores {
    credentials: Arc<dyn CredentialStore>,
    posts: Arc<dyn PostRepository>,
    friends: Arc<dyn FriendDirectory>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let stores = open_stores(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_service: Arc<dyn TokenService> = Arc::new(HmacTokenService::new(
        config.token_signing_key(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);
    let notifier: Arc<dyn Notifier> = Arc::new(NotificationHub::new());

    let services = Arc::new(ApplicationServices::new(
        stores.credentials,
        stores.posts,
        stores.friends,
        password_hasher,
        token_service,
        notifier,
        clock,
    ));

    let max_age_secs = i64::try_from(config.token_ttl().as_secs()).unwrap_or(i64::MAX);
    let state = HttpState {
        services,
        cookies: CookieSettings {
            secure: config.cookie_secure(),
            max_age_secs,
        },
    };

    let app = build_router_with_rate_limiter(
        state,
        config.allowed_origins(),
        config.rate_limit_enabled(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` is set, process memory otherwise. Either way
/// every store call is bounded by the configured timeout.
async fn open_stores(config: &AppConfig) -> Result<Stores> {
    let limit = config.store_timeout();

    let (credentials, posts, friends): (
        Arc<dyn CredentialStore>,
        Arc<dyn PostRepository>,
        Arc<dyn FriendDirectory>,
    ) = match config.database_url() {
        Some(url) => {
            let pool = database::init_pool(url, limit).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres stores");
            (
                Arc::new(PostgresCredentialStore::new(pool.clone())),
                Arc::new(PostgresPostRepository::new(pool.clone())),
                Arc::new(PostgresFriendDirectory::new(pool)),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set; data will not survive a restart");
            (
                Arc::new(InMemoryCredentialStore::new()),
                Arc::new(InMemoryPostRepository::new()),
                Arc::new(InMemoryFriendDirectory::new()),
            )
        }
    };

    Ok(Stores {
        credentials: Arc::new(BoundedCredentialStore::new(credentials, limit)),
        posts: Arc::new(BoundedPostRepository::new(posts, limit)),
        friends: Arc::new(BoundedFriendDirectory::new(friends, limit)),
    })
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
