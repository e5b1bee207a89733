use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// A single location fix reported by a coordinate source.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Position {
    pub point: GeoPoint,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn new(point: GeoPoint, timestamp: DateTime<Utc>) -> Self {
        Position { point, timestamp }
    }

    pub fn now(point: GeoPoint) -> Self {
        Position::new(point, Utc::now())
    }

    /// Returns whether the fix is no older than `maximum_age` at `now`.
    pub fn is_fresh(&self, maximum_age: Duration, now: DateTime<Utc>) -> bool {
        match (now - self.timestamp).to_std() {
            Ok(age) => age <= maximum_age,
            Err(_) => true, // Timestamp lies in the future
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rstest::rstest;

    #[rstest]
    #[case::just_taken(0, true)]
    #[case::at_the_limit(10, true)]
    #[case::too_old(11, false)]
    #[case::from_the_future(-5, true)]
    fn is_fresh(#[case] age_s: i64, #[case] expected: bool) {
        let now = Utc::now();
        let position = Position::new(GeoPoint::new(6.8649, 79.8997), now - TimeDelta::seconds(age_s));

        assert_eq!(position.is_fresh(Duration::from_secs(10), now), expected);
    }
}
