pub mod config;
pub mod error;

pub use config::{AffinityConfig, CacheConfig, CoreConfig, RankingConfig};
pub use error::{AppError, Result};
