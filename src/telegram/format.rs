//! Reply texts built from backend answers and errors
//!
//! Every failure reply starts with a marker for its category so users can tell
//! bad input from an unreachable server from a refused request.

use crate::backend::{BackendError, BackendResult};
use crate::telegram::args::ArgsError;

/// Codes listed in full up to this many; longer lists are cut
pub const MAX_LISTED_CODES: usize = 10;

pub const PARSE_MARKER: &str = "⚠️";
pub const TRANSPORT_MARKER: &str = "🚫";
pub const DECODE_MARKER: &str = "🧩";
pub const FAILURE_MARKER: &str = "❌";

pub const DEFAULT_SUCCESS_MESSAGE: &str = "✅ КИЗы получены";
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";
pub const TRUNCATION_MARKER: &str = "...";

pub const PAYMENT_PENDING: &str = "⏳ Создание платежа...";

/// Reply for a decoded `/requestkiz` answer
pub fn format_codes_reply(result: &BackendResult) -> String {
    if !result.is_success() {
        return format!(
            "{} Ошибка: {}",
            FAILURE_MARKER,
            result.message.as_deref().unwrap_or(UNKNOWN_ERROR)
        );
    }

    let mut message = result
        .message
        .clone()
        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());

    let codes = &result.payload.codes;
    if codes.len() > MAX_LISTED_CODES {
        message.push_str(&format!(
            "\nПолучено {} КИЗов. Первые {}:\n{}\n{}",
            codes.len(),
            MAX_LISTED_CODES,
            codes[..MAX_LISTED_CODES].join("\n"),
            TRUNCATION_MARKER
        ));
    } else if !codes.is_empty() {
        message.push_str("\nСписок КИЗ:\n");
        message.push_str(&codes.join("\n"));
    }

    if !result.payload.file_paths.is_empty() {
        message.push_str("\nФайлы: ");
        message.push_str(&result.payload.file_paths.join(", "));
    }

    message
}

/// Reply for rejected command arguments
pub fn format_args_error(err: &ArgsError) -> String {
    format!("{} {}", PARSE_MARKER, err)
}

/// Reply for a failed `/requestkiz` backend call
pub fn format_backend_error(err: &BackendError) -> String {
    match err {
        BackendError::Transport(e) => format!("{} Ошибка связи с сервером: {}", TRANSPORT_MARKER, e),
        BackendError::Status(status) => format!("{} Ошибка связи с сервером: HTTP {}", TRANSPORT_MARKER, status),
        BackendError::Decode(_) => format!("{} Ошибка формата ответа сервера", DECODE_MARKER),
        BackendError::Rejected(message) => format!(
            "{} Ошибка: {}",
            FAILURE_MARKER,
            message.as_deref().unwrap_or(UNKNOWN_ERROR)
        ),
    }
}

/// Reply carrying the payment link
pub fn format_payment_link(url: &str) -> String {
    format!("🔗 Ссылка для оплаты: {}", url)
}

/// Reply for a failed `/pay` backend call
pub fn format_payment_failure(err: &BackendError) -> String {
    match err {
        BackendError::Rejected(Some(reason)) => {
            format!("{} Не удалось создать платеж: {}", FAILURE_MARKER, reason)
        }
        BackendError::Rejected(None) => format!(
            "{} Не удалось создать платеж. Пожалуйста, попробуйте позже.",
            FAILURE_MARKER
        ),
        other => format_backend_error(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendPayload, BackendStatus};
    use pretty_assertions::assert_eq;

    fn success(codes: Vec<String>, file_paths: Vec<String>, message: Option<&str>) -> BackendResult {
        BackendResult {
            status: BackendStatus::Success,
            message: message.map(str::to_string),
            payload: BackendPayload {
                codes,
                file_paths,
                payment_url: None,
            },
        }
    }

    fn codes(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("KIZ-{:02}", i)).collect()
    }

    #[test]
    fn test_long_list_is_truncated() {
        let reply = format_codes_reply(&success(codes(15), vec![], None));

        assert!(reply.starts_with(DEFAULT_SUCCESS_MESSAGE));
        assert!(reply.contains("Получено 15 КИЗов"));
        let listed = reply.lines().filter(|l| l.starts_with("KIZ-")).count();
        assert_eq!(listed, 10);
        assert!(reply.contains("KIZ-10\n..."));
        assert!(!reply.contains("KIZ-11"));
        assert!(reply.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_short_list_is_complete() {
        let reply = format_codes_reply(&success(codes(3), vec![], Some("Готово")));

        assert_eq!(reply, "Готово\nСписок КИЗ:\nKIZ-01\nKIZ-02\nKIZ-03");
        assert!(!reply.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_exactly_ten_codes_not_truncated() {
        let reply = format_codes_reply(&success(codes(10), vec![], None));
        assert!(reply.contains("Список КИЗ:"));
        assert!(!reply.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_file_paths_suffix() {
        let reply = format_codes_reply(&success(
            vec![],
            vec!["/data/a.csv".to_string(), "/data/a.pdf".to_string()],
            None,
        ));
        assert_eq!(reply, "✅ КИЗы получены\nФайлы: /data/a.csv, /data/a.pdf");
    }

    #[test]
    fn test_failure_result() {
        let result = BackendResult {
            status: BackendStatus::Failure,
            message: Some("ИНН не найден".to_string()),
            payload: BackendPayload::default(),
        };
        assert_eq!(format_codes_reply(&result), "❌ Ошибка: ИНН не найден");

        let result = BackendResult {
            message: None,
            ..result
        };
        assert_eq!(format_codes_reply(&result), "❌ Ошибка: Неизвестная ошибка");
    }

    #[test]
    fn test_error_markers_are_distinct() {
        let status = format_backend_error(&BackendError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        let decode = format_backend_error(&BackendError::from(
            serde_json::from_str::<serde_json::Value>("nope").unwrap_err(),
        ));
        let rejected = format_backend_error(&BackendError::Rejected(None));
        let parse = format_args_error(&ArgsError::Malformed);

        assert!(status.starts_with(TRANSPORT_MARKER));
        assert!(status.contains("503"));
        assert!(decode.starts_with(DECODE_MARKER));
        assert!(rejected.starts_with(FAILURE_MARKER));
        assert!(parse.starts_with(PARSE_MARKER));
    }

    #[test]
    fn test_payment_failure_keeps_reason() {
        let reply = format_payment_failure(&BackendError::Rejected(Some("insufficient funds".to_string())));
        assert!(reply.contains("insufficient funds"));
        assert!(reply.starts_with(FAILURE_MARKER));

        let reply = format_payment_failure(&BackendError::Rejected(None));
        assert!(reply.contains("попробуйте позже"));
    }
}
