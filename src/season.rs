//! Quarter codes and the fixed quarter-to-month table.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Season {
    pub fn code(self) -> &'static str {
        match self {
            Season::Q1 => "Q1",
            Season::Q2 => "Q2",
            Season::Q3 => "Q3",
            Season::Q4 => "Q4",
        }
    }

    /// Month the season's products launch in (1-based).
    pub fn launch_month(self) -> u32 {
        match self {
            Season::Q1 => 2,
            Season::Q2 => 5,
            Season::Q3 => 8,
            Season::Q4 => 11,
        }
    }

    /// `MM-01` suffix appended to the season year.
    pub fn month_day(self) -> &'static str {
        match self {
            Season::Q1 => "02-01",
            Season::Q2 => "05-01",
            Season::Q3 => "08-01",
            Season::Q4 => "11-01",
        }
    }

    pub fn start_date(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.launch_month(), 1)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Q1" => Ok(Season::Q1),
            "Q2" => Ok(Season::Q2),
            "Q3" => Ok(Season::Q3),
            "Q4" => Ok(Season::Q4),
            other => Err(UnknownSeason(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table() {
        let table: Vec<&str> = [Season::Q1, Season::Q2, Season::Q3, Season::Q4]
            .iter()
            .map(|s| s.month_day())
            .collect();
        assert_eq!(table, vec!["02-01", "05-01", "08-01", "11-01"]);
    }

    #[test]
    fn parse_codes() {
        assert_eq!("Q3".parse::<Season>(), Ok(Season::Q3));
        assert_eq!(
            "Q5".parse::<Season>(),
            Err(UnknownSeason("Q5".to_string()))
        );
        // codes are case-sensitive
        assert!("q1".parse::<Season>().is_err());
    }

    #[test]
    fn start_dates() {
        let d = Season::Q4.start_date(2023).unwrap();
        assert_eq!(d.to_string(), "2023-11-01");
        assert_eq!(
            Season::Q1.start_date(2024).unwrap().format("%m-%d").to_string(),
            Season::Q1.month_day()
        );
    }
}
