use std::{
    fmt,
    ops::{Add, Sub},
};

use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

/// A UTC timestamp with second precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    pub fn to_datetime(self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(self.0).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.to_datetime()
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.whole_seconds())
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.whole_seconds())
    }
}

impl Sub for Timestamp {
    type Output = Duration;
    fn sub(self, rhs: Self) -> Duration {
        Duration::seconds(self.0 - rhs.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = self
            .to_datetime()
            .format(&Rfc3339)
            .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_secs() {
        let t1 = Timestamp::now();
        let s1 = t1.as_secs();
        let t2 = Timestamp::from_secs(s1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp::from_secs(1_000);
        assert_eq!(t + Duration::seconds(60), Timestamp::from_secs(1_060));
        assert_eq!(t - Duration::seconds(60), Timestamp::from_secs(940));
        assert_eq!(Timestamp::from_secs(1_060) - t, Duration::seconds(60));
    }

    #[test]
    fn timestamp_ordering() {
        assert!(Timestamp::from_secs(1) < Timestamp::from_secs(2));
    }

    #[test]
    fn display_rfc3339() {
        assert_eq!(Timestamp::from_secs(0).to_string(), "1970-01-01T00:00:00Z");
    }
}
