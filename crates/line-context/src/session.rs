//! Session handed to a conversation context
//!
//! A session exists only when the event can be tied to a LINE user, so
//! group or room events without a `userId` have none.

use serde::{Deserialize, Serialize};

use crate::types::{LineEvent, LineProfile};

/// The user a session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Session of a LINE user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSession {
    pub user: LineUser,
}

impl LineSession {
    /// Create a session for the given user id
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user: LineUser {
                id: user_id.into(),
                display_name: None,
            },
        }
    }

    /// Resolve the session for an event, if it carries a user id
    pub fn from_event(event: &LineEvent) -> Option<Self> {
        event.user_id().map(Self::new)
    }

    /// Attach the display name from a fetched profile
    pub fn with_profile(mut self, profile: &LineProfile) -> Self {
        self.user.display_name = Some(profile.display_name.clone());
        self
    }

    /// Recipient id for push messages
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineSource;

    fn event_from(source: LineSource) -> LineEvent {
        LineEvent {
            event_type: "message".to_string(),
            reply_token: Some("token".to_string()),
            timestamp: 0,
            source,
            message: None,
        }
    }

    #[test]
    fn test_session_from_user_event() {
        let event = event_from(LineSource {
            source_type: "user".to_string(),
            user_id: Some("U123".to_string()),
            group_id: None,
            room_id: None,
        });

        let session = LineSession::from_event(&event).unwrap();
        assert_eq!(session.user_id(), "U123");
        assert!(session.user.display_name.is_none());
    }

    #[test]
    fn test_no_session_for_anonymous_group_event() {
        let event = event_from(LineSource {
            source_type: "group".to_string(),
            user_id: None,
            group_id: Some("C123".to_string()),
            room_id: None,
        });

        assert!(LineSession::from_event(&event).is_none());
    }

    #[test]
    fn test_with_profile() {
        let profile = LineProfile {
            display_name: "Brown".to_string(),
            user_id: "U123".to_string(),
            picture_url: None,
            status_message: None,
        };

        let session = LineSession::new("U123").with_profile(&profile);
        assert_eq!(session.user.display_name.as_deref(), Some("Brown"));
    }
}
