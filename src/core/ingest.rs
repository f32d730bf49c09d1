use serde_json::{Map, Value};
use tracing::debug;

use crate::core::StrikeRecord;
use crate::error::{OverlayError, OverlayResult};

/// Parses a host JSON payload of strike objects leniently.
///
/// Missing, `null`, or non-numeric OI fields become `0`; numeric strings are
/// accepted. A record without a numeric `price` is kept with `price = NaN` so
/// the layout pass reports and skips it without dropping its neighbours.
pub fn parse_strike_records_json(input: &str) -> OverlayResult<Vec<StrikeRecord>> {
    let payload: Value = serde_json::from_str(input).map_err(|e| {
        OverlayError::InvalidData(format!("failed to parse strike payload json: {e}"))
    })?;
    let Value::Array(items) = payload else {
        return Err(OverlayError::InvalidData(
            "strike payload must be a json array".to_owned(),
        ));
    };

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => record_from_fields(fields),
            _ => {
                debug!(index, "strike payload entry is not an object");
                StrikeRecord::new(f64::NAN, 0.0, 0.0, 0.0, 0.0)
            }
        })
        .collect())
}

fn record_from_fields(fields: &Map<String, Value>) -> StrikeRecord {
    let price = fields.get("price").and_then(numeric).unwrap_or(f64::NAN);
    StrikeRecord::new(
        price,
        field_or_zero(fields, &["ce"]),
        field_or_zero(fields, &["pe"]),
        field_or_zero(fields, &["changeInCE", "changeInCe", "change_in_ce"]),
        field_or_zero(fields, &["changeInPE", "changeInPe", "change_in_pe"]),
    )
}

fn field_or_zero(fields: &Map<String, Value>, names: &[&str]) -> f64 {
    names
        .iter()
        .find_map(|name| fields.get(*name))
        .and_then(numeric)
        .unwrap_or(0.0)
}

fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|value| value.is_finite())
}
