use crate::domain::models::Coordinate;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter coordinates as: latitude, longitude")]
    MissingSeparator,
    #[error("Invalid coordinate format. Use: lat, lon")]
    MalformedPair,
    #[error("Coordinates must be valid numbers")]
    NotANumber,
    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange,
    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange,
}

/// Parse free-form "lat, lon" text into a validated coordinate.
/// Pure: same input always yields the same coordinate or error kind.
pub fn parse(raw: &str) -> Result<Coordinate, ValidationError> {
    let raw = raw.trim();
    if !raw.contains(',') {
        return Err(ValidationError::MissingSeparator);
    }
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 2 {
        return Err(ValidationError::MalformedPair);
    }
    let lat_text = parts[0].trim();
    let lon_text = parts[1].trim();
    if lat_text.is_empty() || lon_text.is_empty() {
        return Err(ValidationError::MalformedPair);
    }

    let latitude: f64 = lat_text.parse().map_err(|_| ValidationError::NotANumber)?;
    let longitude: f64 = lon_text.parse().map_err(|_| ValidationError::NotANumber)?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(ValidationError::NotANumber);
    }

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange);
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange);
    }

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse, ValidationError};

    #[test]
    fn parses_valid_pair_with_exact_values() {
        let c = parse("9.93, 76.27").expect("valid coordinate");
        assert_eq!(c.latitude, 9.93);
        assert_eq!(c.longitude, 76.27);
    }

    #[test]
    fn trims_whitespace_around_both_parts() {
        let c = parse("  -12.5 ,  140  ").expect("valid coordinate");
        assert_eq!(c.latitude, -12.5);
        assert_eq!(c.longitude, 140.0);
    }

    #[test]
    fn missing_separator_is_a_format_error() {
        assert_eq!(parse("9.93 76.27"), Err(ValidationError::MissingSeparator));
        assert_eq!(parse(""), Err(ValidationError::MissingSeparator));
    }

    #[test]
    fn three_parts_is_a_format_error() {
        assert_eq!(parse("not,a,number"), Err(ValidationError::MalformedPair));
    }

    #[test]
    fn empty_part_is_a_format_error() {
        assert_eq!(parse("9.93,"), Err(ValidationError::MalformedPair));
        assert_eq!(parse(", 76.27"), Err(ValidationError::MalformedPair));
    }

    #[test]
    fn non_numeric_parts_are_rejected() {
        assert_eq!(parse("abc, 76.27"), Err(ValidationError::NotANumber));
        assert_eq!(parse("9.93, xyz"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert_eq!(parse("NaN, 76.27"), Err(ValidationError::NotANumber));
        assert_eq!(parse("9.93, inf"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn latitude_range_is_enforced() {
        assert_eq!(parse("100, 76"), Err(ValidationError::LatitudeOutOfRange));
        assert_eq!(parse("-90.01, 0"), Err(ValidationError::LatitudeOutOfRange));
        assert!(parse("90, 0").is_ok());
        assert!(parse("-90, 0").is_ok());
    }

    #[test]
    fn longitude_range_is_enforced() {
        assert_eq!(parse("0, 180.5"), Err(ValidationError::LongitudeOutOfRange));
        assert_eq!(parse("0, -181"), Err(ValidationError::LongitudeOutOfRange));
        assert!(parse("0, 180").is_ok());
        assert!(parse("0, -180").is_ok());
    }

    #[test]
    fn range_error_messages_match_user_surface() {
        assert_eq!(
            parse("100, 76").unwrap_err().to_string(),
            "Latitude must be between -90 and 90"
        );
        assert_eq!(
            parse("0, 200").unwrap_err().to_string(),
            "Longitude must be between -180 and 180"
        );
    }
}
