//! `Period` — a time span expressed in a `TimeUnit`.

use crate::frequency::Frequency;
use crate::time_unit::TimeUnit;
use sc_core::errors::{Error, Result};

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// `n` days.
    pub fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` weeks.
    pub fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// `n` months.
    pub fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// `n` years.
    pub fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// Construct a `Period` from a payment frequency.
    ///
    /// # Errors
    /// `NoFrequency` and `OtherFrequency` have no period equivalent.
    pub fn from_frequency(freq: Frequency) -> Result<Self> {
        match freq {
            Frequency::NoFrequency | Frequency::OtherFrequency => Err(Error::InvalidArgument(
                format!("cannot convert {freq} to a period"),
            )),
            Frequency::Once => Ok(Period::years(0)),
            Frequency::Annual => Ok(Period::years(1)),
            Frequency::Semiannual => Ok(Period::months(6)),
            Frequency::Quarterly => Ok(Period::months(3)),
            Frequency::Bimonthly => Ok(Period::months(2)),
            Frequency::Monthly => Ok(Period::months(1)),
            Frequency::Weekly => Ok(Period::weeks(1)),
            Frequency::Daily => Ok(Period::days(1)),
        }
    }

    /// The implied payment frequency, where one exists.
    pub fn frequency(&self) -> Frequency {
        let length = self.length.unsigned_abs();
        if length == 0 {
            return Frequency::Once;
        }
        match self.unit {
            TimeUnit::Years => {
                if length == 1 {
                    Frequency::Annual
                } else {
                    Frequency::OtherFrequency
                }
            }
            TimeUnit::Months => match 12 / length {
                _ if 12 % length != 0 => Frequency::OtherFrequency,
                1 => Frequency::Annual,
                2 => Frequency::Semiannual,
                4 => Frequency::Quarterly,
                6 => Frequency::Bimonthly,
                12 => Frequency::Monthly,
                _ => Frequency::OtherFrequency,
            },
            TimeUnit::Weeks => {
                if length == 1 {
                    Frequency::Weekly
                } else {
                    Frequency::OtherFrequency
                }
            }
            TimeUnit::Days => {
                if length == 1 {
                    Frequency::Daily
                } else {
                    Frequency::OtherFrequency
                }
            }
        }
    }

    /// Negate the period (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Period::months(3).to_string(), "3M");
        assert_eq!(Period::years(1).to_string(), "1Y");
        assert_eq!(Period::months(-6).to_string(), "-6M");
    }

    #[test]
    fn frequency_round_trip() {
        for freq in [
            Frequency::Annual,
            Frequency::Semiannual,
            Frequency::Quarterly,
            Frequency::Monthly,
            Frequency::Weekly,
            Frequency::Daily,
        ] {
            assert_eq!(Period::from_frequency(freq).unwrap().frequency(), freq);
        }
        assert!(Period::from_frequency(Frequency::NoFrequency).is_err());
    }

    #[test]
    fn odd_tenors_have_other_frequency() {
        assert_eq!(Period::months(5).frequency(), Frequency::OtherFrequency);
        assert_eq!(Period::days(7).frequency(), Frequency::OtherFrequency);
    }
}
