//! JSON response building.
//!
//! Every response, success or error, is a single JSON object with either a
//! `result` key or an `error` key, sent with `Content-Type: application/json`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::Value;

/// Build a 200 response wrapping a computation result.
pub fn build_result_response(result: Value) -> Response<Full<Bytes>> {
    build_json_response(StatusCode::OK, &serde_json::json!({ "result": result }))
}

/// Build an error response with shape `{"error": "<message>"}`.
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    build_json_response(status, &serde_json::json!({ "error": message }))
}

/// Build 404 Not Found response (unmatched path or method)
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "Not found")
}

fn build_json_response(status: StatusCode, body: &Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            crate::logger::log_error(&format!("Failed to build {status} response: {e}"));
            Response::new(Full::new(Bytes::from(
                r#"{"error":"Internal server error"}"#,
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_result_response_shape() {
        let resp = build_result_response(Value::from(42));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["result"].as_u64(), Some(42));
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let resp = build_error_response(StatusCode::BAD_REQUEST, "Bad request");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()["content-type"], "application/json");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"].as_str(), Some("Bad request"));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let resp = build_not_found_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"Not found"}"#);
    }
}
