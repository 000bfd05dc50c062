use crate::domain::entities::comment::CommentSnapshot;
use crate::shared::config::RankingConfig;

/// Favors near-even vote splits at volume. `magnitude^balance`, where balance
/// is the weaker side over the stronger side; zero when either side is empty,
/// since one-sided voting is not controversial.
pub fn controversy_score(up: u64, down: u64) -> f64 {
    if up == 0 || down == 0 {
        return 0.0;
    }
    let magnitude = (up + down) as f64;
    let balance = up.min(down) as f64 / up.max(down) as f64;
    magnitude.powf(balance)
}

/// Lower bound of the confidence interval on the true upvote ratio at the
/// configured z-score. A single upvote never outranks a well-voted item with
/// a slightly worse raw ratio.
pub fn wilson_lower_bound(config: &RankingConfig, up: u64, down: u64) -> f64 {
    let n = (up + down) as f64;
    if n == 0.0 {
        return 0.0;
    }
    let z = config.wilson_z;
    let p = up as f64 / n;
    let left = p + z * z / (2.0 * n);
    let right = z * (p * (1.0 - p) / n + z * z / (4.0 * n * n)).sqrt();
    let under = 1.0 + z * z / n;
    (left - right) / under
}

/// Time-decayed ranking score: log-scaled vote delta plus an age term that
/// keeps falling as the clock advances. The age term is deliberately
/// `created - now`, so the score decreases without bound for a fixed delta.
pub fn hot_score(config: &RankingConfig, up: u64, down: u64, created_at_ms: i64, now_ms: i64) -> f64 {
    let s = up as i64 - down as i64;
    let order = (s.unsigned_abs().max(1) as f64).log10();
    let sign = s.signum() as f64;
    let age_term = (created_at_ms - now_ms) as f64 / config.hot_decay_divisor_ms;
    round7(sign * order + age_term)
}

fn round7(value: f64) -> f64 {
    (value * 1e7).round() / 1e7
}

/// Orderings the feed layer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    Controversy,
    Confidence,
    Hot,
}

/// Sorts comment snapshots best-first under the requested ordering.
pub fn rank_comments(
    config: &RankingConfig,
    order: RankOrder,
    snapshots: &mut [CommentSnapshot],
    now_ms: i64,
) {
    let score = |snapshot: &CommentSnapshot| -> f64 {
        let votes = snapshot.votes;
        match order {
            RankOrder::Controversy => controversy_score(votes.up, votes.down),
            RankOrder::Confidence => wilson_lower_bound(config, votes.up, votes.down),
            RankOrder::Hot => hot_score(config, votes.up, votes.down, snapshot.created_at_ms, now_ms),
        }
    };
    snapshots.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(std::cmp::Ordering::Equal));
}
