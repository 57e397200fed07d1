use serde::{Deserialize, Serialize};

use crate::BoardConfig;

/// The three fixed difficulty presets. Pure data, nothing more: each one
/// pins a grid size and a mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    VeryBeginner,
    Beginner,
    Advanced,
}

impl Level {
    pub const fn config(self) -> BoardConfig {
        match self {
            Self::VeryBeginner => BoardConfig::new_unchecked(5, 4, 2),
            Self::Beginner => BoardConfig::new_unchecked(10, 8, 10),
            Self::Advanced => BoardConfig::new_unchecked(24, 20, 99),
        }
    }
}
