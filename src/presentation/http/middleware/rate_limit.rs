// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client limiter for the credential endpoints. The limiter state is
/// shared process-wide so every router built in one process counts against
/// the same buckets.
pub fn auth_rate_limit_layer() -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    static RATE_LIMITER: OnceLock<Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>>> =
        OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(10);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

            Some(GovernorLayer::new(config))
        })
        .clone()
}
