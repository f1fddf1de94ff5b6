//! Command argument parsing for /requestkiz and /pay
//!
//! `/requestkiz <gtin> <count> [<gtin> <count> ...] [inn <taxId>]`
//! `/pay <amount> <orderId>`

use thiserror::Error;

use crate::backend::{CodeRequest, CodeRequestItem, PaymentRequest};

/// Flag that introduces the tax identifier (matched case-insensitively)
pub const INN_FLAG: &str = "inn";

pub const REQUEST_KIZ_USAGE: &str = "Используйте: /requestkiz <gtin1> <кол-во1> [<gtin2> <кол-во2>...] [inn <ИНН>]";
pub const PAY_USAGE: &str = "Используйте: /pay <сумма> <ID заказа>";

/// Why command arguments were rejected. `Display` is the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Too few arguments; carries the usage hint for the command
    #[error("{0}")]
    Usage(&'static str),

    #[error("Некорректный формат аргументов.")]
    Malformed,

    #[error("Необходимо указать хотя бы один GTIN с количеством.")]
    NoItems,

    #[error("Необходимо указать ИНН (inn <номер>).")]
    MissingInn,

    #[error("Сумма должна быть числом. Пример: /pay 100.50 order123")]
    AmountNotNumber,

    #[error("Сумма должна быть положительным числом")]
    AmountNotPositive,
}

/// Splits the text after a command into tokens
pub fn tokenize(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}

/// Parses `/requestkiz` tokens into a code request.
///
/// Tokens are consumed pairwise: either `inn <taxId>` or `<gtin> <count>`.
/// The first bad pair aborts the whole parse. When `inn` is given more than
/// once the last value wins.
pub fn parse_code_request<S: AsRef<str>>(tokens: &[S], requester_id: i64) -> Result<CodeRequest, ArgsError> {
    if tokens.len() < 2 {
        return Err(ArgsError::Usage(REQUEST_KIZ_USAGE));
    }

    let mut items = Vec::new();
    let mut inn: Option<String> = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        let next: Option<&str> = tokens.get(i + 1).map(|t| t.as_ref());

        if token.eq_ignore_ascii_case(INN_FLAG) {
            let value = next.ok_or(ArgsError::Malformed)?;
            inn = Some(value.to_string());
            i += 2;
            continue;
        }

        let count = next
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or(ArgsError::Malformed)?;
        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(ArgsError::Malformed)?;

        items.push(CodeRequestItem {
            gtin: token.to_string(),
            count,
        });
        i += 2;
    }

    if items.is_empty() {
        return Err(ArgsError::NoItems);
    }

    let inn = inn.ok_or(ArgsError::MissingInn)?;

    Ok(CodeRequest {
        items,
        inn,
        requester_id,
    })
}

/// Parses `/pay` tokens into a payment request. Tokens after the order ID are ignored.
pub fn parse_payment_request<S: AsRef<str>>(tokens: &[S], requester_id: i64) -> Result<PaymentRequest, ArgsError> {
    if tokens.len() < 2 {
        return Err(ArgsError::Usage(PAY_USAGE));
    }

    let amount: f64 = tokens[0]
        .as_ref()
        .parse()
        .map_err(|_| ArgsError::AmountNotNumber)?;

    if !amount.is_finite() {
        return Err(ArgsError::AmountNotNumber);
    }
    if amount <= 0.0 {
        return Err(ArgsError::AmountNotPositive);
    }

    Ok(PaymentRequest {
        amount,
        order_id: tokens[1].as_ref().to_string(),
        requester_id,
    })
}
