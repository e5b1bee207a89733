use crate::domain::{GeoPoint, InvalidCoordinate, Position};
use crate::location::FixSender;
use std::io::BufRead;
use std::num::ParseFloatError;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Parses a `<latitude>,<longitude>` line into a point.
pub fn parse_fix(line: &str) -> Result<GeoPoint, FixParseError> {
    let (latitude, longitude) = line.split_once(',').ok_or_else(|| FixParseError::InvalidFormat(line.to_string()))?;
    let latitude = latitude.trim().parse::<f64>()?;
    let longitude = longitude.trim().parse::<f64>()?;

    Ok(GeoPoint::try_new(latitude, longitude)?)
}

/// Reads fixes line by line from `reader` and publishes each valid one until the input ends.
///
/// Blocks on `reader`, run it on its own thread for interactive input.
#[instrument(skip_all)]
pub fn feed_fixes<R: BufRead>(reader: R, tx: FixSender) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("⚠️ Unable to read location input: {}", err);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_fix(&line) {
            Ok(point) => {
                debug!(latitude = point.latitude, longitude = point.longitude, "📍 Received location fix");
                tx.send(Position::now(point));
            }
            Err(err) => warn!("⚠️ Ignoring location input '{}': {}", line, err),
        }
    }

    info!("📍 Location input ended");
}

#[derive(Error, Debug, PartialEq)]
pub enum FixParseError {
    #[error("expected '<latitude>,<longitude>', found '{0}'")]
    InvalidFormat(String),
    #[error(transparent)]
    InvalidNumber(#[from] ParseFloatError),
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{CoordinateSource, LocationOptions, WatchCoordinateSource};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("6.8649,79.8997", GeoPoint::new(6.8649, 79.8997))]
    #[case::whitespace("  6.8649 ,  79.8997 ", GeoPoint::new(6.8649, 79.8997))]
    #[case::negative("-33.8688,151.2093", GeoPoint::new(-33.8688, 151.2093))]
    fn parse_fix_accepts(#[case] line: &str, #[case] expected: GeoPoint) {
        assert_eq!(parse_fix(line), Ok(expected));
    }

    #[test_log::test]
    fn parse_fix_requires_a_separator() {
        assert_eq!(parse_fix("6.8649 79.8997"), Err(FixParseError::InvalidFormat("6.8649 79.8997".to_string())));
    }

    #[test_log::test]
    fn parse_fix_rejects_garbage() {
        assert!(matches!(parse_fix("north,79.8997"), Err(FixParseError::InvalidNumber(_))));
    }

    #[test_log::test]
    fn parse_fix_rejects_out_of_range_coordinates() {
        assert_eq!(
            parse_fix("95.0,79.8997"),
            Err(FixParseError::InvalidCoordinate(InvalidCoordinate::Latitude(95.0)))
        );
    }

    #[test_log::test(tokio::test)]
    async fn feed_fixes_publishes_the_last_valid_fix() -> Result<(), crate::location::LocationError> {
        let (tx, source) = WatchCoordinateSource::channel();
        let input: &[u8] = b"6.8649,79.8997\n\nnot a fix\n6.8825,79.8829\n";

        feed_fixes(input, tx);

        let position = source.current_position(&LocationOptions::default()).await?;
        assert_eq!(position.point, GeoPoint::new(6.8825, 79.8829));
        Ok(())
    }
}
