pub mod errors;
pub mod id;

pub use errors::{ConfigError, DuckChatError};
pub use id::{new_id, short_id, SessionId};

pub type Result<T> = std::result::Result<T, DuckChatError>;
