/// In-memory state carried between poll cycles. Rebuilt on every start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSession {
    since_timestamp: i64,
    last_sent_message: Option<String>,
}

impl PollSession {
    pub fn starting_at(since_timestamp: i64) -> Self {
        Self {
            since_timestamp,
            last_sent_message: None,
        }
    }

    pub fn since_timestamp(&self) -> i64 {
        self.since_timestamp
    }

    pub fn last_sent_message(&self) -> Option<&str> {
        self.last_sent_message.as_deref()
    }

    pub fn is_duplicate(&self, message: &str) -> bool {
        self.last_sent_message() == Some(message)
    }

    pub(crate) fn record_delivery(&mut self, message: String) {
        self.last_sent_message = Some(message);
    }

    /// Moves the window forward; an absent server date keeps the old one.
    pub(crate) fn advance_to(&mut self, current_date: Option<i64>) {
        if let Some(current_date) = current_date {
            self.since_timestamp = current_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PollSession;

    #[test]
    fn fresh_session_has_nothing_to_deduplicate() {
        let session = PollSession::starting_at(1700000000);
        assert_eq!(session.since_timestamp(), 1700000000);
        assert_eq!(session.last_sent_message(), None);
        assert!(!session.is_duplicate(""));
    }

    #[test]
    fn duplicate_check_uses_the_exact_text() {
        let mut session = PollSession::starting_at(0);
        session.record_delivery("Сбой в работе программы: A".to_string());

        assert!(session.is_duplicate("Сбой в работе программы: A"));
        assert!(!session.is_duplicate("Сбой в работе программы: B"));
        assert!(!session.is_duplicate("Сбой в работе программы: A "));
    }

    #[test]
    fn advance_keeps_timestamp_without_server_date() {
        let mut session = PollSession::starting_at(1700000000);
        session.advance_to(None);
        assert_eq!(session.since_timestamp(), 1700000000);

        session.advance_to(Some(1700000100));
        assert_eq!(session.since_timestamp(), 1700000100);
    }
}
