pub mod rate_limit;
pub mod session;

pub use rate_limit::auth_rate_limit_layer;
pub use session::require_session;
