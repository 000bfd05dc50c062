use crate::domain::entities::interaction::{TopicInteraction, WebsiteTopicVotes};
use crate::shared::config::AffinityConfig;

/// How strongly a user gravitates toward a topic, in `[0, 100]`.
///
/// Upvotes and downvotes both count as engagement (weighted), every
/// "not interested" signal discounts the accumulated engagement
/// exponentially, and the whole thing saturates toward 100 around
/// `confidence_interactions` weighted interactions.
pub fn topic_taste_score(config: &AffinityConfig, interaction: &TopicInteraction) -> f64 {
    let vote_score = config.upvote_weight * interaction.upvotes as f64
        + config.downvote_weight * interaction.downvotes as f64;
    let normalized = vote_score / (interaction.not_interested as f64).exp();
    let boost = (1.0_f64 / 3.0).exp();
    let score = 100.0 * (1.0 - (-(boost * normalized) / config.confidence_interactions).exp());
    sanitize(score)
}

/// How well a topic lands on a website overall, in `[0, 100]`: the vote delta
/// for the topic relative to all voting activity on the website. Distinct
/// from an individual user's taste.
pub fn website_topic_affinity_score(votes: &WebsiteTopicVotes) -> f64 {
    if votes.total_votes_on_website == 0 {
        return 0.0;
    }
    let delta = votes.upvotes as f64 - votes.downvotes as f64;
    let boost = (1.0_f64 / 3.0).exp();
    let score =
        100.0 * (1.0 - (-(boost * delta) / votes.total_votes_on_website as f64).exp());
    sanitize(score)
}

// Degenerate input (zero totals, NaN from division) is a normal case, not an
// error: it maps to 0.
fn sanitize(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
