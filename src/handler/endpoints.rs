//! Endpoint handlers for the numeric computation routes.
//!
//! Each handler validates its input, runs the pure computation and maps the
//! outcome to a JSON response. Validation failures never reach a computation.

use crate::compute;
use crate::http::body::{read_json_body, BodyRejection};
use crate::http::query;
use crate::http::response;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Response, StatusCode};
use num_bigint::{BigInt, BigUint, Sign};
use serde_json::Value;

/// Why an input was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Missing or malformed input: absent parameter, non-integer,
    /// body that is not an array of numbers.
    Unprocessable,
    /// Well-formed but semantically out of range: negative n, empty array.
    OutOfRange,
}

impl Rejection {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::OutOfRange => StatusCode::BAD_REQUEST,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unprocessable => "Unprocessable Entity",
            Self::OutOfRange => "Bad request",
        }
    }
}

fn reject(rejection: &Rejection) -> Response<Full<Bytes>> {
    response::build_error_response(rejection.status(), rejection.message())
}

/// Validate a raw `n` parameter: must be present, parse as an integer and
/// be non-negative. A negative integer of any magnitude is out of range,
/// and `"-0"` parses to zero and is accepted. Accepted values are capped
/// at `u64::MAX`; anything above is rejected as unprocessable.
pub fn validate_n(raw: Option<&str>) -> Result<u64, Rejection> {
    let raw = raw.ok_or(Rejection::Unprocessable)?;
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n);
    }
    // Slow path: sign-check via big-integer parse so negatives below
    // i64::MIN are still classified as out of range, not malformed
    match raw.parse::<BigInt>() {
        Ok(n) if n.sign() == Sign::Minus => Err(Rejection::OutOfRange),
        Ok(n) => u64::try_from(n).map_err(|_| Rejection::Unprocessable),
        Err(_) => Err(Rejection::Unprocessable),
    }
}

/// GET /factorial?n=N
pub fn handle_factorial(query_string: &str) -> Response<Full<Bytes>> {
    match validate_n(query::extract_query_param(query_string, "n")) {
        Ok(n) => big_result_response(&compute::factorial(n)),
        Err(rejection) => reject(&rejection),
    }
}

/// GET /fibonacci/N — N is the last path segment
pub fn handle_fibonacci(path: &str) -> Response<Full<Bytes>> {
    match validate_n(Some(query::extract_path_param(path))) {
        Ok(n) => big_result_response(&compute::fibonacci(n)),
        Err(rejection) => reject(&rejection),
    }
}

/// GET /mean — body is a JSON array of numbers
pub async fn handle_mean<B>(body: B, max_body_size: u64) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Unpin,
{
    let parsed = match read_json_body(body, max_body_size).await {
        Ok(parsed) => parsed,
        Err(BodyRejection::TooLarge) => {
            return response::build_error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload too large",
            );
        }
        Err(_) => return reject(&Rejection::Unprocessable),
    };

    let Some(value) = parsed else {
        return reject(&Rejection::Unprocessable);
    };

    match extract_numbers(&value) {
        Ok(numbers) if numbers.is_empty() => reject(&Rejection::OutOfRange),
        Ok(numbers) => response::build_result_response(Value::from(compute::mean(&numbers))),
        Err(rejection) => reject(&rejection),
    }
}

/// Require a JSON array whose elements are all numbers.
/// Booleans are not numbers and are rejected.
fn extract_numbers(value: &Value) -> Result<Vec<f64>, Rejection> {
    let array = value.as_array().ok_or(Rejection::Unprocessable)?;
    array
        .iter()
        .map(|element| element.as_f64().ok_or(Rejection::Unprocessable))
        .collect()
}

/// Wrap an arbitrary-precision integer as a raw JSON number so large results
/// are not truncated to a fixed-width type.
fn big_result_response(value: &BigUint) -> Response<Full<Bytes>> {
    let number = serde_json::Number::from_string_unchecked(value.to_string());
    response::build_result_response(Value::Number(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_n_valid() {
        assert_eq!(validate_n(Some("0")), Ok(0));
        assert_eq!(validate_n(Some("17")), Ok(17));
        // larger than u32
        assert_eq!(validate_n(Some("9999999999")), Ok(9_999_999_999));
    }

    #[test]
    fn test_validate_n_missing() {
        assert_eq!(validate_n(None), Err(Rejection::Unprocessable));
    }

    #[test]
    fn test_validate_n_not_integer() {
        assert_eq!(validate_n(Some("abc")), Err(Rejection::Unprocessable));
        assert_eq!(validate_n(Some("1.5")), Err(Rejection::Unprocessable));
        assert_eq!(validate_n(Some("")), Err(Rejection::Unprocessable));
    }

    #[test]
    fn test_validate_n_negative() {
        assert_eq!(validate_n(Some("-1")), Err(Rejection::OutOfRange));
        assert_eq!(validate_n(Some("-100")), Err(Rejection::OutOfRange));
    }

    #[test]
    fn test_validate_n_negative_zero() {
        assert_eq!(validate_n(Some("-0")), Ok(0));
    }

    #[test]
    fn test_validate_n_negative_below_i64_min() {
        // still a well-formed integer, so out of range rather than malformed
        assert_eq!(
            validate_n(Some("-99999999999999999999999999")),
            Err(Rejection::OutOfRange)
        );
    }

    #[test]
    fn test_validate_n_above_u64_max() {
        assert_eq!(
            validate_n(Some("18446744073709551616")),
            Err(Rejection::Unprocessable)
        );
    }

    #[test]
    fn test_extract_numbers_rejects_booleans() {
        let value = serde_json::json!([1, true, 3]);
        assert_eq!(extract_numbers(&value), Err(Rejection::Unprocessable));
    }

    #[test]
    fn test_extract_numbers_rejects_non_array() {
        let value = serde_json::json!("not a list");
        assert_eq!(extract_numbers(&value), Err(Rejection::Unprocessable));
    }

    #[test]
    fn test_extract_numbers_mixed_int_float() {
        let value = serde_json::json!([1, 2.5]);
        assert_eq!(extract_numbers(&value), Ok(vec![1.0, 2.5]));
    }
}
