use std::io::Read;

use anyhow::Result;
use axum::http::HeaderMap;
use flate2::read::GzDecoder;

use backend_domain::TrackPayload;

/// Decodes the request body (gzip-aware) and parses the track payload.
/// Field presence and amount coercion are checked by the application layer.
pub fn parse_track_payload(headers: &HeaderMap, body: &[u8]) -> Result<TrackPayload> {
    let content = maybe_gunzip(headers, body)?;
    let payload: TrackPayload = serde_json::from_str(&content)?;
    Ok(payload)
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8]) -> Result<String> {
    if let Some(encoding) = headers.get("Content-Encoding") {
        if encoding.to_str().unwrap_or("") == "gzip" {
            let mut decoder = GzDecoder::new(body);
            let mut out = String::new();
            decoder.read_to_string(&mut out)?;
            return Ok(out);
        }
    }
    Ok(String::from_utf8(body.to_vec())?)
}
