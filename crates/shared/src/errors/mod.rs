mod error;
mod generation;
mod http;
mod service;
mod validate;

pub use self::error::ErrorResponse;
pub use self::generation::GenerationError;
pub use self::http::AppErrorHttp;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
