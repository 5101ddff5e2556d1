pub mod errors;

pub use errors::{ConfigError, GifNorrisError};

pub type Result<T> = std::result::Result<T, GifNorrisError>;
