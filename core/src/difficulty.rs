use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// The three preset board tiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Beginner => BoardConfig::new_unchecked(9, 10),
            Self::Intermediate => BoardConfig::new_unchecked(16, 40),
            Self::Expert => BoardConfig::new_unchecked(22, 100),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the numeric selector `1`..`3` as well as the tier name.
impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "1" => return Ok(Self::Beginner),
            "2" => return Ok(Self::Intermediate),
            "3" => return Ok(Self::Expert),
            _ => {}
        }

        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_tiers() {
        assert_eq!(Difficulty::Beginner.config(), BoardConfig::new_unchecked(9, 10));
        assert_eq!(Difficulty::Intermediate.config().total_cells(), 256);
        assert_eq!(Difficulty::Expert.config().safe_cells(), 384);
    }

    #[test]
    fn presets_are_valid_configs() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            assert_eq!(BoardConfig::new(config.size, config.mines), Ok(config));
        }
    }

    #[test]
    fn parses_numbers_and_names() {
        assert_eq!("1".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Intermediate));
        assert_eq!(" Expert ".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert_eq!(
            "4".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("4".to_string()))
        );
    }
}
