//! The `"<magnitude>|<direction>"` token used to pass vectors between blocks.

use log::warn;

use crate::error::{TextFault, VectorError};

pub const SEPARATOR: char = '|';

/// Splits a token into its integer magnitude and direction (degrees).
pub fn parse(token: &str) -> Result<(i64, i64), VectorError> {
    let fields: Vec<&str> = token.split(SEPARATOR).collect();
    let (mag, dir) = match fields.as_slice() {
        [mag, dir] => (*mag, *dir),
        [_] => return Err(reject(token, TextFault::MissingSeparator)),
        _ => return Err(reject(token, TextFault::ExtraSeparator)),
    };

    let mag = mag
        .parse::<i64>()
        .map_err(|_| reject(token, TextFault::BadMagnitude))?;
    let dir = dir
        .parse::<i64>()
        .map_err(|_| reject(token, TextFault::BadDirection))?;
    Ok((mag, dir))
}

/// Renders both fields rounded half away from zero.
pub fn format(magnitude: f64, direction_degrees: f64) -> String {
    format!(
        "{}{}{}",
        round_field(magnitude),
        SEPARATOR,
        round_field(direction_degrees)
    )
}

// `-0.0 as i64` is 0, so a direction like -0.3 renders as "0".
fn round_field(value: f64) -> i64 {
    value.round() as i64
}

fn reject(token: &str, reason: TextFault) -> VectorError {
    warn!("rejecting vector text {:?}: {}", token, reason);
    VectorError::malformed(token, reason)
}
