use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record modification timestamp.
///
/// The freshness comparison in the delta engine orders stamps on a common
/// numeric axis via [`Stamp::as_f64`]; a missing stamp (`Option::<Stamp>::None`)
/// is treated as zero on that axis. Both streams of a pair should use the same
/// representation so the numeric mapping agrees with the caller's clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Stamp {
    /// Integer timestamp (e.g. seconds or a version counter)
    Int(i64),
    /// Floating point timestamp
    Float(f64),
    /// UTC wall-clock timestamp
    Time(DateTime<Utc>),
}

impl Stamp {
    /// Project this stamp onto the numeric freshness axis.
    ///
    /// `Time` maps to fractional seconds since the Unix epoch.
    pub fn as_f64(&self) -> f64 {
        match self {
            Stamp::Int(v) => *v as f64,
            Stamp::Float(v) => *v,
            Stamp::Time(t) => t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9,
        }
    }
}

impl From<i64> for Stamp {
    fn from(v: i64) -> Self {
        Stamp::Int(v)
    }
}

impl From<f64> for Stamp {
    fn from(v: f64) -> Self {
        Stamp::Float(v)
    }
}

impl From<DateTime<Utc>> for Stamp {
    fn from(v: DateTime<Utc>) -> Self {
        Stamp::Time(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_projection() {
        assert_eq!(Stamp::Int(100).as_f64(), 100.0);
        assert_eq!(Stamp::Float(4.2).as_f64(), 4.2);

        let t = Utc.with_ymd_and_hms(2024, 5, 4, 0, 0, 0).unwrap();
        assert_eq!(Stamp::Time(t).as_f64(), t.timestamp() as f64);
    }

    #[test]
    fn test_projection_orders_across_variants() {
        assert!(Stamp::Int(2).as_f64() > Stamp::Float(1.5).as_f64());
        assert!(Stamp::Float(0.0).as_f64() >= Stamp::Int(0).as_f64());
    }
}
