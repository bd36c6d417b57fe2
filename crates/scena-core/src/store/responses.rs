use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The user already responded to this listing. Informational; the
    /// screen shows a message and nothing changes.
    #[error("already responded to listing {id}")]
    AlreadyResponded { id: String },
}

/// Tracks which listings the user has responded to this session.
///
/// At most one response per listing; there is no un-respond. The set is
/// created empty at session start, grows monotonically, and dies with
/// the process.
#[derive(Debug, Default)]
pub struct ResponseTracker {
    responded: HashSet<String>,
}

impl ResponseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_responded(&self, id: &str) -> bool {
        self.responded.contains(id)
    }

    /// Record a response to `id`. Fails without mutating if a response
    /// was already recorded.
    pub fn respond(&mut self, id: &str) -> Result<(), ResponseError> {
        if !self.responded.insert(id.to_string()) {
            return Err(ResponseError::AlreadyResponded { id: id.to_string() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_response_succeeds_second_fails() {
        let mut tracker = ResponseTracker::new();
        assert!(!tracker.has_responded("1"));

        tracker.respond("1").unwrap();
        assert!(tracker.has_responded("1"));

        match tracker.respond("1") {
            Err(ResponseError::AlreadyResponded { id }) => assert_eq!(id, "1"),
            Ok(()) => panic!("second response must fail"),
        }
        assert!(tracker.has_responded("1"));
    }

    #[test]
    fn responses_are_tracked_per_listing() {
        let mut tracker = ResponseTracker::new();
        tracker.respond("1").unwrap();

        assert!(!tracker.has_responded("2"));
        tracker.respond("2").unwrap();
        assert!(tracker.has_responded("1"));
        assert!(tracker.has_responded("2"));
    }
}
