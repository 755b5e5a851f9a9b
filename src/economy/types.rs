use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Coins,
    Crystals,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Coins, Currency::Crystals];

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Coins => "coins",
            Currency::Crystals => "crystals",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
