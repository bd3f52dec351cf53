//! Planet position routes
//!
//! `GET /api/positions?date=YYYY-MM-DD` returns heliocentric and
//! geocentric coordinates for all eight planets on the requested date.
//! Date validation failures map to 400 with the body shapes the Orrery
//! client already understands; only a lost Earth reference maps to 500.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use planetary_mechanics::PositionResult;

use crate::AppState;

#[derive(Deserialize)]
pub struct PositionsQuery {
    pub date: Option<String>,
}

/// Error body shared by the 400/500 responses. Optional fields are
/// omitted from the wire when unset.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provided: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub async fn get_positions(
    State(state): State<AppState>,
    Query(query): Query<PositionsQuery>,
) -> Result<Json<PositionResult>, ErrorReply> {
    let date = parse_date(&query)?;

    tracing::info!(%date, "calculating positions");

    match state.service.compute(date) {
        Ok(result) => {
            tracing::info!(%date, library = %result.library, "positions served");
            Ok(Json(result))
        }
        Err(err) => {
            tracing::error!(%date, error = %err, "position computation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal error calculating positions".to_string(),
                    example: None,
                    provided: None,
                    details: Some(err.to_string()),
                    date: Some(date.to_string()),
                }),
            ))
        }
    }
}

/// Strict `YYYY-MM-DD` parse of the query parameter, with the missing
/// and malformed cases mapped to their 400 bodies.
///
/// The shape gate runs before chrono, which would otherwise accept
/// unpadded digits like `2005-1-1`.
fn parse_date(query: &PositionsQuery) -> Result<NaiveDate, ErrorReply> {
    let Some(raw) = query.date.as_deref() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please provide a date in YYYY-MM-DD format".to_string(),
                example: Some("2005-11-01".to_string()),
                provided: None,
                details: None,
                date: None,
            }),
        ));
    };

    let invalid = || {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid date format. Please use YYYY-MM-DD format".to_string(),
                example: None,
                provided: Some(raw.to_string()),
                details: None,
                date: None,
            }),
        )
    };

    if !is_iso_date_shape(raw) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

/// Exactly ten bytes of `dddd-dd-dd`. Calendar validity is chrono's job.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
}
