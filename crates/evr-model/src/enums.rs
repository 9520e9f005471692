//! Type-safe enumerations for event report metadata.
//!
//! These enums give compile-time safety to concepts the analytics API
//! represents as strings: program registration type, the analytics output
//! resource, and relative period codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a program tracks registered entities or standalone events.
///
/// Registration-based programs carry tracked entity instances and
/// enrollments; event programs only carry events. The distinction drives
/// which capture application a row links into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramType {
    /// Tracker program: subjects are registered and followed over time.
    WithRegistration,
    /// Event program: standalone events with no registration.
    WithoutRegistration,
}

impl ProgramType {
    /// Returns the canonical API name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::WithRegistration => "WITH_REGISTRATION",
            ProgramType::WithoutRegistration => "WITHOUT_REGISTRATION",
        }
    }

    /// Returns true for tracker (registration-based) programs.
    pub fn has_registration(&self) -> bool {
        matches!(self, ProgramType::WithRegistration)
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProgramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WITH_REGISTRATION" => Ok(ProgramType::WithRegistration),
            "WITHOUT_REGISTRATION" => Ok(ProgramType::WithoutRegistration),
            _ => Err(format!("Unknown program type: {s}")),
        }
    }
}

/// Which analytics resource a report queries: one row per event, or one
/// row per enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputType {
    /// One row per captured event.
    #[default]
    Event,
    /// One row per case enrollment.
    Enrollment,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Event => "EVENT",
            OutputType::Enrollment => "ENROLLMENT",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EVENT" => Ok(OutputType::Event),
            "ENROLLMENT" => Ok(OutputType::Enrollment),
            _ => Err(format!("Unknown output type: {s}")),
        }
    }
}

/// Relative period selection for the analytics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RelativePeriod {
    #[default]
    Last12Months,
    Last6Months,
    Last3Months,
    ThisYear,
    LastYear,
}

impl RelativePeriod {
    /// Returns the analytics period code.
    pub fn code(&self) -> &'static str {
        match self {
            RelativePeriod::Last12Months => "LAST_12_MONTHS",
            RelativePeriod::Last6Months => "LAST_6_MONTHS",
            RelativePeriod::Last3Months => "LAST_3_MONTHS",
            RelativePeriod::ThisYear => "THIS_YEAR",
            RelativePeriod::LastYear => "LAST_YEAR",
        }
    }
}

impl fmt::Display for RelativePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for RelativePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LAST_12_MONTHS" => Ok(RelativePeriod::Last12Months),
            "LAST_6_MONTHS" => Ok(RelativePeriod::Last6Months),
            "LAST_3_MONTHS" => Ok(RelativePeriod::Last3Months),
            "THIS_YEAR" => Ok(RelativePeriod::ThisYear),
            "LAST_YEAR" => Ok(RelativePeriod::LastYear),
            _ => Err(format!("Unknown relative period: {s}")),
        }
    }
}

/// Relative period flags as the report catalog stores them.
///
/// More than one flag may be set; [`RelativePeriods::selected`] resolves
/// the conflict with a fixed priority order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativePeriods {
    pub last12_months: bool,
    pub last6_months: bool,
    pub last3_months: bool,
    pub this_year: bool,
    pub last_year: bool,
}

impl RelativePeriods {
    /// First set flag wins, in declaration order. No flag set falls back
    /// to the last-12-months default.
    pub fn selected(&self) -> RelativePeriod {
        if self.last12_months {
            RelativePeriod::Last12Months
        } else if self.last6_months {
            RelativePeriod::Last6Months
        } else if self.last3_months {
            RelativePeriod::Last3Months
        } else if self.this_year {
            RelativePeriod::ThisYear
        } else if self.last_year {
            RelativePeriod::LastYear
        } else {
            RelativePeriod::default()
        }
    }
}

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_type_from_str() {
        assert_eq!(
            "WITH_REGISTRATION".parse::<ProgramType>().unwrap(),
            ProgramType::WithRegistration
        );
        assert_eq!(
            "without_registration".parse::<ProgramType>().unwrap(),
            ProgramType::WithoutRegistration
        );
        assert!("TRACKER".parse::<ProgramType>().is_err());
    }

    #[test]
    fn test_output_type_round_trip() {
        assert_eq!("EVENT".parse::<OutputType>().unwrap(), OutputType::Event);
        assert_eq!(OutputType::Enrollment.to_string(), "ENROLLMENT");
    }

    #[test]
    fn test_relative_period_priority() {
        let periods = RelativePeriods {
            last6_months: true,
            last_year: true,
            ..Default::default()
        };
        assert_eq!(periods.selected(), RelativePeriod::Last6Months);
    }

    #[test]
    fn test_relative_period_default() {
        assert_eq!(
            RelativePeriods::default().selected(),
            RelativePeriod::Last12Months
        );
    }

    #[test]
    fn test_period_code() {
        assert_eq!(RelativePeriod::ThisYear.code(), "THIS_YEAR");
        assert_eq!(
            "LAST_3_MONTHS".parse::<RelativePeriod>().unwrap(),
            RelativePeriod::Last3Months
        );
    }
}
