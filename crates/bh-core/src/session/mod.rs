//! User session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Logged-in user session.
///
/// Persisted as one serialized record written atomically. Presence of the
/// record *is* the logged-in state; there is no separate boolean that could
/// go out of sync with the phone/token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub phone: String,
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(phone: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            token: token.into(),
            logged_in_at: Utc::now(),
        }
    }

    /// Phone number masked for display, e.g. `138****1234`.
    pub fn masked_phone(&self) -> String {
        if self.phone.len() == 11 {
            format!("{}****{}", &self.phone[..3], &self.phone[7..])
        } else {
            self.phone.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_standard_phone_numbers() {
        let session = Session::new("13812341234", "t");
        assert_eq!(session.masked_phone(), "138****1234");
    }

    #[test]
    fn leaves_unexpected_lengths_alone() {
        let session = Session::new("12345", "t");
        assert_eq!(session.masked_phone(), "12345");
    }
}
