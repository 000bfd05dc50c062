use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub ranking: RankingConfig,
    pub affinity: AffinityConfig,
    pub cache: CacheConfig,
}

/// Constants feeding the vote-based ranking scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// z-score for the Wilson lower bound (80% confidence).
    pub wilson_z: f64,
    /// Milliseconds of age that offset one order of magnitude of votes.
    pub hot_decay_divisor_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffinityConfig {
    pub upvote_weight: f64,
    pub downvote_weight: f64,
    /// Weighted interactions needed to reach roughly 75% confidence.
    pub confidence_interactions: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Age after which a locally written entry counts as expired, in seconds.
    pub expiry_window_secs: i64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            ranking: RankingConfig::default(),
            affinity: AffinityConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            wilson_z: 1.281551565545,
            hot_decay_divisor_ms: 45_000.0,
        }
    }
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            upvote_weight: 1.5,
            downvote_weight: 1.0,
            confidence_interactions: 500.0,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        // Roughly one month
        Self {
            expiry_window_secs: 30 * 24 * 60 * 60,
        }
    }
}
