//! Per-session star ratings for clients in the task table.

use std::collections::HashMap;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Client id -> rating (1-5). Not persisted; reset with the session.
#[derive(Debug, Clone, Default)]
pub struct RatingBook {
    ratings: HashMap<String, u8>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a rating, clamped to the button range. Returns the stored value.
    pub fn rate(&mut self, client_id: &str, value: i64) -> u8 {
        let clamped = value.clamp(MIN_RATING as i64, MAX_RATING as i64) as u8;
        self.ratings.insert(client_id.to_string(), clamped);
        clamped
    }

    pub fn get(&self, client_id: &str) -> Option<u8> {
        self.ratings.get(client_id).copied()
    }

    pub fn all(&self) -> &HashMap<String, u8> {
        &self.ratings
    }

    pub fn reset(&mut self) {
        self.ratings.clear();
    }
}
