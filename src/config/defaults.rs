pub(super) const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

pub(super) fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub(super) fn default_retry_period_secs() -> u64 {
    600
}

pub(super) fn default_request_timeout_secs() -> u64 {
    30
}

pub(super) fn default_connect_timeout_secs() -> u64 {
    10
}
