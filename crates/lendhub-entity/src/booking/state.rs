//! Booking state filter keywords for list queries.

use std::fmt;
use std::str::FromStr;

use lendhub_core::AppError;

/// Temporal/status partition selected by a list query.
///
/// ALL, PAST, CURRENT, and FUTURE partition bookings by their rental
/// window relative to the instant the query captures; WAITING and
/// REJECTED select by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Return the keyword as sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingState {
    type Err = AppError;

    /// Matching is case-sensitive and exact; the keyword set is part of
    /// the wire contract.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::unsupported_state(
                "Unknown state: UNSUPPORTED_STATUS",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendhub_core::error::ErrorKind;

    #[test]
    fn test_known_keywords_parse() {
        assert_eq!("ALL".parse::<BookingState>().unwrap(), BookingState::All);
        assert_eq!(
            "CURRENT".parse::<BookingState>().unwrap(),
            BookingState::Current
        );
        assert_eq!(
            "REJECTED".parse::<BookingState>().unwrap(),
            BookingState::Rejected
        );
    }

    #[test]
    fn test_unknown_keyword_fails() {
        let err = "Unknown".parse::<BookingState>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedState);
        assert_eq!(err.message, "Unknown state: UNSUPPORTED_STATUS");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!("current".parse::<BookingState>().is_err());
        assert!(" CURRENT".parse::<BookingState>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for state in [
            BookingState::All,
            BookingState::Current,
            BookingState::Past,
            BookingState::Future,
            BookingState::Waiting,
            BookingState::Rejected,
        ] {
            assert_eq!(state.as_str().parse::<BookingState>().unwrap(), state);
        }
    }
}
