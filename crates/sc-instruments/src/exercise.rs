//! Option exercise rights.

use sc_time::Date;
use std::fmt;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Exercisable only at expiry.
    European,
    /// Exercisable at any time up to expiry.
    American,
    /// Exercisable on specific dates.
    Bermudan,
}

/// When an option can be exercised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    exercise_type: ExerciseType,
    dates: Vec<Date>,
}

impl Exercise {
    /// A European exercise with a single expiry date.
    pub fn european(expiry: Date) -> Self {
        Self {
            exercise_type: ExerciseType::European,
            dates: vec![expiry],
        }
    }

    /// An American exercise between two dates.
    pub fn american(earliest: Date, latest: Date) -> Self {
        Self {
            exercise_type: ExerciseType::American,
            dates: vec![earliest, latest],
        }
    }

    /// A Bermudan exercise on the given dates.
    pub fn bermudan(mut dates: Vec<Date>) -> Self {
        dates.sort();
        dates.dedup();
        Self {
            exercise_type: ExerciseType::Bermudan,
            dates,
        }
    }

    /// The exercise type.
    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }

    /// All exercise dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The last possible exercise date.
    pub fn last_date(&self) -> Date {
        *self.dates.last().expect("exercise has at least one date")
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exercise_type {
            ExerciseType::European => write!(f, "European({})", self.dates[0]),
            ExerciseType::American => {
                write!(f, "American({} to {})", self.dates[0], self.last_date())
            }
            ExerciseType::Bermudan => write!(f, "Bermudan({} dates)", self.dates.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn european() {
        let ex = Exercise::european(date(2030, 6, 17));
        assert_eq!(ex.exercise_type(), ExerciseType::European);
        assert_eq!(ex.dates().len(), 1);
        assert_eq!(ex.last_date(), date(2030, 6, 17));
    }

    #[test]
    fn bermudan_dates_sorted_and_deduped() {
        let ex = Exercise::bermudan(vec![
            date(2027, 6, 17),
            date(2026, 6, 17),
            date(2027, 6, 17),
        ]);
        assert_eq!(ex.dates().len(), 2);
        assert_eq!(ex.last_date(), date(2027, 6, 17));
    }
}
