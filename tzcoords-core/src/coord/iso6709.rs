//! decoder for the ISO 6709 Annex H compact coordinate form used by the tzdb
//! `zone1970.tab` table, e.g. `+4230+00131` or `+404251-0740023`.
//!
//! a token is a signed latitude of 2, 4 or 6 digits (DD, DDMM, DDMMSS) followed
//! immediately by a signed longitude of 3, 5 or 7 digits (DDD, DDDMM, DDDMMSS).
//! there is no delimiter; the second sign character marks the split.
use super::{CoordinateError, CoordinateField, LatLon};

/// shortest accepted token, `±DD±DDD`
pub const MIN_TOKEN_LENGTH: usize = 7;
/// longest accepted token, `±DDMMSS±DDDMMSS`
pub const MAX_TOKEN_LENGTH: usize = 15;

/// decodes a compact ISO 6709 coordinate pair into decimal degrees.
pub fn decode_pair(token: &str) -> Result<LatLon, CoordinateError> {
    let (lat_text, lon_text) = split_pair(token)?;
    let lat = decode_field(CoordinateField::Latitude, lat_text)?;
    let lon = decode_field(CoordinateField::Longitude, lon_text)?;
    LatLon::new(lat, lon)
}

/// splits a token into its signed latitude and longitude fields. the split
/// point is the position of the second sign character.
pub fn split_pair(token: &str) -> Result<(&str, &str), CoordinateError> {
    let len = token.len();
    if !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&len) {
        return Err(CoordinateError::InvalidLength(token.to_string(), len));
    }
    let bytes = token.as_bytes();
    if !is_sign(bytes[0]) {
        return Err(CoordinateError::MissingSign {
            field: CoordinateField::Latitude,
            token: token.to_string(),
        });
    }
    let signs = bytes
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, b)| is_sign(**b))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    match signs.as_slice() {
        [] => Err(CoordinateError::MissingSign {
            field: CoordinateField::Longitude,
            token: token.to_string(),
        }),
        // sign characters are ASCII so this is always a char boundary
        [split] => Ok(token.split_at(*split)),
        [_, extra, ..] => Err(CoordinateError::UnexpectedSign {
            position: *extra,
            token: token.to_string(),
        }),
    }
}

/// decodes a single signed field (sign character included) into decimal degrees.
///
/// minutes and seconds are taken as 2-digit groups following the degrees and combined
/// as `degrees + minutes/60 + seconds/3600` before the sign is applied.
pub fn decode_field(field: CoordinateField, text: &str) -> Result<f64, CoordinateError> {
    let negative = match text.as_bytes().first() {
        Some(b'+') => false,
        Some(b'-') => true,
        _ => {
            return Err(CoordinateError::MissingSign {
                field,
                token: text.to_string(),
            })
        }
    };
    let digits = &text[1..];
    let expected = field.valid_widths();
    if !expected.contains(&digits.len()) {
        return Err(CoordinateError::InvalidWidth {
            field,
            text: text.to_string(),
            digits: digits.len(),
            expected,
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::NonDigit {
            field,
            text: text.to_string(),
        });
    }

    let degree_digits = field.degree_digits();
    let degrees = digit_group(&digits[..degree_digits]);
    let minutes = digits
        .get(degree_digits..degree_digits + 2)
        .map(digit_group)
        .unwrap_or_default();
    let seconds = digits
        .get(degree_digits + 2..degree_digits + 4)
        .map(digit_group)
        .unwrap_or_default();

    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    let value = if negative { -magnitude } else { magnitude };

    let bound = field.max_degrees();
    if value.abs() > bound {
        return Err(CoordinateError::OutOfRange {
            field,
            text: text.to_string(),
            value,
            bound,
        });
    }
    Ok(value)
}

fn is_sign(b: u8) -> bool {
    b == b'+' || b == b'-'
}

/// reads a run of ASCII digits, already validated by the caller.
fn digit_group(digits: &str) -> f64 {
    digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0')) as f64
}
