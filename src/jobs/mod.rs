use tokio::time::{Duration, Instant, sleep};

use crate::tracker::{HomeworkSource, Notifier, Poller};

/// Polls forever with a fixed pause after each completed cycle.
pub async fn run_poll_job<S, N>(poller: &mut Poller<S, N>, period: Duration)
where
    S: HomeworkSource,
    N: Notifier,
{
    loop {
        let started = Instant::now();
        poller.poll_once().await;

        let elapsed = started.elapsed();
        if elapsed > period {
            log::warn!(
                "poll_cycle_overrun elapsed_secs={} period_secs={}",
                elapsed.as_secs(),
                period.as_secs()
            );
        }

        sleep(period).await;
    }
}
