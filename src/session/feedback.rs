use bevy::prelude::*;
use std::time::Instant;
use thiserror::Error;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("rating {0} is outside 1-{max}", max = MAX_RATING)]
    RatingOutOfRange(u8),
    #[error("please write a comment")]
    EmptyComment,
}

#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub submitted_at: Instant,
}

/// Reviews left during this session, newest first
#[derive(Resource, Default, Debug)]
pub struct FeedbackBoard {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackBoard {
    pub fn submit(&mut self, author: &str, rating: u8, comment: &str) -> Result<(), FeedbackError> {
        if rating == 0 || rating > MAX_RATING {
            return Err(FeedbackError::RatingOutOfRange(rating));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(FeedbackError::EmptyComment);
        }
        let author = match author.trim() {
            "" => "Anonymous",
            name => name,
        };

        self.entries.insert(
            0,
            FeedbackEntry {
                author: author.to_string(),
                rating,
                comment: comment.to_string(),
                submitted_at: Instant::now(),
            },
        );
        Ok(())
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn average_rating(&self) -> Option<f32> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: u32 = self.entries.iter().map(|e| u32::from(e.rating)).sum();
        Some(sum as f32 / self.entries.len() as f32)
    }

    pub fn remove(&mut self, index: usize) -> Option<FeedbackEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("please enter your name")]
    MissingName,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("please enter a message")]
    MissingMessage,
}

/// Contents of the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
            None => false,
        };
        if !valid_email {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_average() {
        let mut board = FeedbackBoard::default();
        assert_eq!(board.average_rating(), None);

        board.submit("Lucía", 5, "Best paella in town").unwrap();
        board.submit("", 2, "  Too salty ").unwrap();

        assert_eq!(board.entries().len(), 2);
        assert_eq!(board.entries()[0].author, "Anonymous");
        assert_eq!(board.entries()[0].comment, "Too salty");
        assert_eq!(board.average_rating(), Some(3.5));
    }

    #[test]
    fn test_submit_rejects_invalid_input() {
        let mut board = FeedbackBoard::default();
        assert_eq!(board.submit("a", 0, "ok"), Err(FeedbackError::RatingOutOfRange(0)));
        assert_eq!(board.submit("a", 6, "ok"), Err(FeedbackError::RatingOutOfRange(6)));
        assert_eq!(board.submit("a", 3, "   "), Err(FeedbackError::EmptyComment));
        assert!(board.entries().is_empty());
    }

    #[test]
    fn test_remove() {
        let mut board = FeedbackBoard::default();
        board.submit("a", 4, "first").unwrap();
        assert!(board.remove(3).is_none());
        assert_eq!(board.remove(0).map(|e| e.comment), Some("first".to_string()));
        assert!(board.entries().is_empty());
    }

    #[test]
    fn test_contact_validation() {
        let mut msg = ContactMessage {
            name: "Pau".into(),
            email: "pau@example.com".into(),
            message: "Table for four?".into(),
        };
        assert_eq!(msg.validate(), Ok(()));

        msg.email = "pau.example.com".into();
        assert_eq!(
            msg.validate(),
            Err(ContactError::InvalidEmail("pau.example.com".into()))
        );
        msg.email = "@example.com".into();
        assert!(msg.validate().is_err());

        msg.email = "pau@example.com".into();
        msg.message = " ".into();
        assert_eq!(msg.validate(), Err(ContactError::MissingMessage));

        msg.name = String::new();
        assert_eq!(msg.validate(), Err(ContactError::MissingName));
    }
}
