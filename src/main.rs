mod config;
mod homework;
mod jobs;
mod tracker;

use std::process::ExitCode;

use chrono::Utc;
use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::load_config;
use crate::jobs::run_poll_job;
use crate::tracker::{PollSession, Poller, PracticumClient, TelegramNotifier};

const LOG_FORMAT_VAR: &str = "HOMEWORK_BOT_LOG_FORMAT";

fn init_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let pretty = std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format.eq_ignore_ascii_case("pretty"));

    let result = if pretty {
        let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter).finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        eprintln!("global logger initialization failed: {}", error);
    }
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        log::error!("signal_listener_failed error={}", error);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match load_config() {
        Ok(config) => config,
        Err(error) => {
            log::error!("CRITICAL: configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let client = match PracticumClient::new(&config.secrets.practicum_token, &config.polling) {
        Ok(client) => client,
        Err(error) => {
            log::error!("CRITICAL: http client initialization failed: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let bot = Bot::new(&config.secrets.telegram_token);
    let notifier = TelegramNotifier::new(bot, config.secrets.chat.clone());
    let session = PollSession::starting_at(Utc::now().timestamp());

    log::info!(
        "Homework bot is starting... endpoint={} retry_period_secs={} from_date={}",
        client.endpoint(),
        config.polling.retry_period_secs,
        session.since_timestamp()
    );

    let mut poller = Poller::new(client, notifier, session);

    tokio::select! {
        _ = run_poll_job(&mut poller, config.polling.retry_period()) => {}
        _ = wait_for_shutdown() => {
            log::info!("shutdown_requested signal=ctrl_c");
        }
    }

    ExitCode::SUCCESS
}
