mod profile;
mod search;
mod service;
mod session;

pub use profile::USER_NOT_FOUND;
pub use search::SEARCH_QUERY_REQUIRED;
pub use service::UserQueryService;
