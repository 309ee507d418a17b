/// Review state of a homework as reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HomeworkStatus;

    #[test]
    fn parses_exactly_the_known_codes() {
        assert_eq!(HomeworkStatus::parse("approved"), Some(HomeworkStatus::Approved));
        assert_eq!(HomeworkStatus::parse("reviewing"), Some(HomeworkStatus::Reviewing));
        assert_eq!(HomeworkStatus::parse("rejected"), Some(HomeworkStatus::Rejected));

        assert_eq!(HomeworkStatus::parse("Approved"), None);
        assert_eq!(HomeworkStatus::parse("pending"), None);
        assert_eq!(HomeworkStatus::parse(""), None);
    }

    #[test]
    fn every_status_has_a_distinct_verdict() {
        let verdicts: Vec<_> = HomeworkStatus::ALL
            .into_iter()
            .map(HomeworkStatus::verdict)
            .collect();
        assert_eq!(verdicts.len(), 3);
        assert_ne!(verdicts[0], verdicts[1]);
        assert_ne!(verdicts[1], verdicts[2]);
        assert_ne!(verdicts[0], verdicts[2]);
    }
}
