use std::fmt;
use std::str::FromStr;

pub const TEAM_KEY_PREFIX: &str = "frc";

pub fn team_key(team_number: impl fmt::Display) -> String {
    format!("{TEAM_KEY_PREFIX}{team_number}")
}

// keys without the prefix are returned as-is
pub fn team_number_from_key(key: &str) -> &str {
    key.strip_prefix(TEAM_KEY_PREFIX).unwrap_or(key)
}

pub fn event_key(year: impl fmt::Display, event_code: &str) -> String {
    format!("{year}{}", event_code.to_lowercase())
}

/// `{year}{event_code}_{comp_level}{set_number}m{match_number}`, e.g. `2019casj_f1m1`.
/// A missing or zero set number contributes nothing.
pub fn match_key(year: impl fmt::Display, event_code: &str, descriptor: &MatchDescriptor) -> String {
    let set = descriptor
        .set_number
        .filter(|n| *n != 0)
        .map(|n| n.to_string())
        .unwrap_or_default();
    format!(
        "{year}{event_code}_{}{set}m{}",
        descriptor.comp_level, descriptor.match_number
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompLevel {
    Q,
    Ef,
    Qf,
    Sf,
    F,
}

impl CompLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompLevel::Q => "q",
            CompLevel::Ef => "ef",
            CompLevel::Qf => "qf",
            CompLevel::Sf => "sf",
            CompLevel::F => "f",
        }
    }
}

impl fmt::Display for CompLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown comp level `{0}` (expected one of q, ef, qf, sf, f)")]
pub struct ParseCompLevelError(String);

impl FromStr for CompLevel {
    type Err = ParseCompLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "q" => Ok(CompLevel::Q),
            "ef" => Ok(CompLevel::Ef),
            "qf" => Ok(CompLevel::Qf),
            "sf" => Ok(CompLevel::Sf),
            "f" => Ok(CompLevel::F),
            _ => Err(ParseCompLevelError(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchDescriptor {
    pub comp_level: CompLevel,
    pub match_number: u32,
    pub set_number: Option<u32>,
}

impl MatchDescriptor {
    pub fn new(comp_level: CompLevel, match_number: u32) -> Self {
        Self {
            comp_level,
            match_number,
            set_number: None,
        }
    }

    pub fn with_set(mut self, set_number: u32) -> Self {
        self.set_number = Some(set_number);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_team_key_round_trips_number() {
        for n in [1, 254, 1678, 9999] {
            let key = team_key(n);
            assert_eq!(key, format!("frc{n}"));
            assert_eq!(team_number_from_key(&key), n.to_string());
        }
    }

    #[test]
    fn test_team_key_passes_malformed_input_through() {
        assert_eq!(team_key("abc"), "frcabc");
        assert_eq!(team_number_from_key("254"), "254");
    }

    #[test]
    fn test_event_key_is_lowercased() {
        assert_eq!(event_key(2019, "CASJ"), "2019casj");
        assert_eq!(event_key(2019, "ABC"), event_key(2019, "abc"));
    }

    #[test]
    fn test_match_key_without_set_number() {
        let final_one = MatchDescriptor::new(CompLevel::F, 1);
        assert_eq!(match_key(2019, "casj", &final_one), "2019casj_fm1");

        let qual = MatchDescriptor::new(CompLevel::Q, 12);
        assert_eq!(match_key(2022, "cafr", &qual), "2022cafr_qm12");
    }

    #[test]
    fn test_match_key_with_set_number() {
        let d = MatchDescriptor::new(CompLevel::F, 1).with_set(1);
        assert_eq!(match_key(2019, "casj", &d), "2019casj_f1m1");

        let d = MatchDescriptor::new(CompLevel::Qf, 3).with_set(3);
        assert_eq!(match_key(2022, "cafr", &d), "2022cafr_qf3m3");
    }

    #[test]
    fn test_match_key_zero_set_number_is_omitted() {
        let d = MatchDescriptor::new(CompLevel::Sf, 2).with_set(0);
        assert_eq!(match_key(2019, "casj", &d), "2019casj_sfm2");
    }

    #[test]
    fn test_comp_level_parse() {
        assert_eq!("qf".parse::<CompLevel>(), Ok(CompLevel::Qf));
        assert_eq!("SF".parse::<CompLevel>(), Ok(CompLevel::Sf));
        assert_eq!("q".parse::<CompLevel>(), Ok(CompLevel::Q));
        assert!("x".parse::<CompLevel>().is_err());
    }
}
