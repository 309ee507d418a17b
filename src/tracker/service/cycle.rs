use std::time::Instant;

use crate::homework::{PollError, current_date, extract_homeworks, failure_message, parse_status};

use crate::tracker::{notifier::Notifier, provider::HomeworkSource, session::PollSession};

/// Result of handing one message to the dedup-and-notify path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Sent,
    Duplicate,
    Failed,
}

#[derive(Debug)]
pub enum CycleOutcome {
    /// The API reported no homework changes in the window.
    Idle,
    Status(Dispatch),
    Failure { error: PollError, dispatch: Dispatch },
}

impl CycleOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CycleOutcome::Idle => "idle",
            CycleOutcome::Status(Dispatch::Sent) => "status_sent",
            CycleOutcome::Status(Dispatch::Duplicate) => "status_duplicate",
            CycleOutcome::Status(Dispatch::Failed) => "status_undelivered",
            CycleOutcome::Failure {
                dispatch: Dispatch::Sent,
                ..
            } => "failure_sent",
            CycleOutcome::Failure {
                dispatch: Dispatch::Duplicate,
                ..
            } => "failure_duplicate",
            CycleOutcome::Failure {
                dispatch: Dispatch::Failed,
                ..
            } => "failure_undelivered",
        }
    }

    pub fn error(&self) -> Option<&PollError> {
        match self {
            CycleOutcome::Failure { error, .. } => Some(error),
            CycleOutcome::Idle | CycleOutcome::Status(_) => None,
        }
    }
}

struct StatusUpdate {
    message: String,
    current_date: Option<i64>,
}

pub struct Poller<S, N> {
    source: S,
    notifier: N,
    session: PollSession,
}

impl<S: HomeworkSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, session: PollSession) -> Self {
        Self {
            source,
            notifier,
            session,
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &PollSession {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Runs one fetch/validate/format/notify cycle. Never fails: errors are
    /// turned into a failure report that goes through the same dedup path.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let started = Instant::now();
        let from_date = self.session.since_timestamp();

        let outcome = match self.check_updates(from_date).await {
            Ok(None) => {
                log::debug!("no_new_statuses from_date={}", from_date);
                CycleOutcome::Idle
            }
            Ok(Some(update)) => {
                let dispatch = self.dispatch(update.message).await;
                if dispatch == Dispatch::Sent {
                    self.session.advance_to(update.current_date);
                }
                CycleOutcome::Status(dispatch)
            }
            Err(error) => {
                log::error!("poll_cycle_failed kind={} error={}", error.kind(), error);
                let dispatch = self.dispatch(failure_message(&error)).await;
                CycleOutcome::Failure { error, dispatch }
            }
        };

        tracing::info!(
            target: "poller",
            module = "poller",
            from_date,
            since_timestamp = self.session.since_timestamp(),
            outcome = outcome.label(),
            error_kind = outcome.error().map(PollError::kind),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "poll_cycle_finished"
        );

        outcome
    }

    async fn check_updates(&mut self, from_date: i64) -> Result<Option<StatusUpdate>, PollError> {
        let raw = self.source.fetch(from_date).await?;
        let homeworks = extract_homeworks(&raw)?;

        // Only the newest record is reported; the rest wait for later windows.
        let Some(latest) = homeworks.first() else {
            return Ok(None);
        };
        if homeworks.len() > 1 {
            log::debug!("homeworks_skipped count={}", homeworks.len() - 1);
        }

        let message = parse_status(latest)?;
        Ok(Some(StatusUpdate {
            message,
            current_date: current_date(&raw),
        }))
    }

    async fn dispatch(&mut self, message: String) -> Dispatch {
        if self.session.is_duplicate(&message) {
            log::debug!("notification_suppressed reason=duplicate text={}", message);
            return Dispatch::Duplicate;
        }

        if !self.notifier.send(&message).await {
            return Dispatch::Failed;
        }

        self.session.record_delivery(message);
        Dispatch::Sent
    }
}
