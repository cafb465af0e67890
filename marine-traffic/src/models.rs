use serde::Deserialize;
use track_core::{FetchError, RawPositionRecord, fetch_error::InvalidResponseSnafu};

/// Envelope the API returns instead of positions, e.g. for an unknown key or exhausted
/// credits. It is delivered with a successful status code.
#[derive(Debug, Deserialize)]
struct ApiErrors {
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    detail: String,
}

/// Parses a `protocol:jsono` track export body.
pub fn parse_track(body: &str) -> Result<Vec<RawPositionRecord>, FetchError> {
    if body.trim().is_empty() {
        return InvalidResponseSnafu {
            cause: "response body was empty",
        }
        .fail();
    }

    match serde_json::from_str::<Vec<RawPositionRecord>>(body) {
        Ok(records) => Ok(records),
        Err(e) => {
            let cause = match serde_json::from_str::<ApiErrors>(body) {
                Ok(ApiErrors { errors }) if !errors.is_empty() => errors
                    .iter()
                    .map(|v| format!("{} ({})", v.detail, v.code))
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => e.to_string(),
            };
            InvalidResponseSnafu { cause }.fail()
        }
    }
}
