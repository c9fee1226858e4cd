//! Request handlers.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use redacted_core::DiscoveryManifest;

use crate::app::AppState;

#[derive(Debug, Default)]
pub struct RedactParams {
    pub text: Option<String>,
}

/// `GET /` — redact the `text` query parameter.
pub async fn redact_get(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<String, StatusCode> {
    let params = parse_params(query.as_deref().unwrap_or(""))?;
    Ok(redact(&state, params))
}

/// `POST /` — redact the `text` form field.
pub async fn redact_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, StatusCode> {
    let raw = std::str::from_utf8(&body).map_err(|_| StatusCode::BAD_REQUEST)?;
    let params = parse_params(raw)?;
    Ok(redact(&state, params))
}

/// Strict urlencoded parsing for the redaction endpoints.
///
/// The stock `Query`/`Form` extractors decode lossily: percent-encoded
/// bytes that are not valid UTF-8 come out as U+FFFD and the request
/// sails through. Redaction must never run over silently rewritten
/// input, so malformed sequences are rejected with a 400 before the
/// pipeline sees them.
fn parse_params(raw: &str) -> Result<RedactParams, StatusCode> {
    let mut params = RedactParams::default();
    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key)? == "text" {
            params.text = Some(decode_component(value)?);
        }
    }
    Ok(params)
}

fn decode_component(encoded: &str) -> Result<String, StatusCode> {
    // '+' is the form encoding of a space; a literal plus arrives
    // percent-encoded as %2B.
    let unplussed = encoded.replace('+', " ");
    urlencoding::decode(&unplussed)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| StatusCode::BAD_REQUEST)
}

fn redact(state: &AppState, params: RedactParams) -> String {
    // Log the size only; logging redaction input verbatim would defeat
    // the service.
    let text_len = params.text.as_deref().map_or(0, str::len);
    tracing::info!(text_len, "received redact request");
    state.pipeline.redact(params.text.as_deref())
}

/// `GET /discover` — static capability manifest for orchestrators.
pub async fn discover_handler() -> Json<DiscoveryManifest> {
    tracing::info!("received a discovery request");
    Json(DiscoveryManifest::for_service())
}

/// `GET /health` — liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_decoding_rejects_invalid_utf8_sequences() {
        assert_eq!(decode_component("%FF%FE"), Err(StatusCode::BAD_REQUEST));
        assert_eq!(decode_component("ok%FFno"), Err(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn valid_escapes_and_plus_signs_decode() {
        assert_eq!(decode_component("caf%C3%A9").unwrap(), "café");
        assert_eq!(decode_component("a+b%2Bc").unwrap(), "a b+c");
    }

    #[test]
    fn parse_params_picks_the_text_field_out_of_many() {
        let params = parse_params("lang=en&text=hello%20there&x=1").unwrap();
        assert_eq!(params.text.as_deref(), Some("hello there"));
        assert!(parse_params("lang=en").unwrap().text.is_none());
        assert!(parse_params("").unwrap().text.is_none());
    }
}
