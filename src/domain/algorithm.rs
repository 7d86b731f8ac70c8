//! Algorithm enum for selecting how rule evaluation runs.
//!
//! Only the read-only evaluation sweep can be split across threads; the
//! apply pass touches neighbours of the flipped cell and always runs serially.

use std::{fmt, str::FromStr};

/// Available evaluation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Evaluate cells one after another on the calling thread
    #[default]
    Serial,
    /// Evaluate cells on the rayon pool; queue order matches `Serial`
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Name used on the command line and in the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Short description for logs and `--list-presets` output
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "single-threaded rule evaluation",
            Algorithm::Parallel => "rule evaluation spread over the rayon pool",
        }
    }

    /// Flip between the two strategies
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown algorithm '{s}' (expected serial or parallel)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let serial = Algorithm::Serial.description();
        let parallel = Algorithm::Parallel.description();
        assert!(!serial.is_empty() && !parallel.is_empty());
        assert_ne!(serial, parallel);
    }

    #[test]
    fn test_parse() {
        assert_eq!("parallel".parse::<Algorithm>(), Ok(Algorithm::Parallel));
        assert_eq!("Serial".parse::<Algorithm>(), Ok(Algorithm::Serial));
        assert!("simd".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Algorithm::Serial.toggled(), Algorithm::Parallel);
        assert_eq!(Algorithm::Parallel.toggled().toggled(), Algorithm::Parallel);
    }
}
