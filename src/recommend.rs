//! Recommendation collaborator seam.
//!
//! The service only needs an ordered list of track URIs for a given
//! conversation history; where that list comes from is opaque. The shipped
//! implementation is a fixed stub, intended to be replaced by an external
//! ranking or LLM-backed service implementing the same trait.

/// Maps a conversation/history string to an ordered list of track URIs.
pub trait Recommender: Send + Sync {
    fn recommend(&self, history: &str) -> Vec<String>;
}

/// Placeholder recommender returning a fixed track list regardless of input.
pub struct StaticRecommender;

impl Recommender for StaticRecommender {
    fn recommend(&self, _history: &str) -> Vec<String> {
        vec![
            "spotify:track:4uLU6hMCjMI75M1A2tKUQC".to_string(), // Never Gonna Give You Up
            "spotify:track:7GhIk7Il098yCjg4BQjzvb".to_string(), // Take on Me
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_recommender_ignores_history() {
        let recommender = StaticRecommender;
        let a = recommender.recommend("80s pop");
        let b = recommender.recommend("");

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|uri| uri.starts_with("spotify:track:")));
    }
}
