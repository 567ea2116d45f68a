//! Request body accumulation and JSON decoding.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use serde_json::Value;

/// Why a request body could not be turned into a JSON value.
#[derive(Debug, PartialEq, Eq)]
pub enum BodyRejection {
    /// Accumulated bytes exceeded the configured limit.
    TooLarge,
    /// Transport error while receiving a chunk.
    Read,
    /// Bytes were received but are not valid JSON.
    Malformed,
}

/// Accumulate body chunks until the stream ends, then parse the bytes
/// as JSON. `Ok(None)` means the request carried no body bytes at all.
///
/// The caller validates the shape of the returned value.
pub async fn read_json_body<B>(mut body: B, max_size: u64) -> Result<Option<Value>, BodyRejection>
where
    B: Body<Data = Bytes> + Unpin,
{
    let mut buf: Vec<u8> = Vec::new();
    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(|_| BodyRejection::Read)?;
        // Trailer frames carry no data and are skipped
        if let Ok(data) = frame.into_data() {
            if (buf.len() + data.len()) as u64 > max_size {
                return Err(BodyRejection::TooLarge);
            }
            buf.extend_from_slice(&data);
        }
    }

    if buf.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(&buf)
        .map(Some)
        .map_err(|_| BodyRejection::Malformed)
}
