use serde::{Deserialize, Serialize};
use std::fmt;

/// Server regions the generation service can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Me,
    Ind,
    Id,
    Vn,
    Th,
    Bd,
    Pk,
    Tw,
    Eu,
    Ru,
    Na,
    Sac,
    Br,
}

impl Region {
    /// Every supported region, in the order the service lists them.
    pub const ALL: [Region; 13] = [
        Region::Me,
        Region::Ind,
        Region::Id,
        Region::Vn,
        Region::Th,
        Region::Bd,
        Region::Pk,
        Region::Tw,
        Region::Eu,
        Region::Ru,
        Region::Na,
        Region::Sac,
        Region::Br,
    ];

    /// The wire token for this region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Me => "ME",
            Region::Ind => "IND",
            Region::Id => "ID",
            Region::Vn => "VN",
            Region::Th => "TH",
            Region::Bd => "BD",
            Region::Pk => "PK",
            Region::Tw => "TW",
            Region::Eu => "EU",
            Region::Ru => "RU",
            Region::Na => "NA",
            Region::Sac => "SAC",
            Region::Br => "BR",
        }
    }

    /// Case-insensitive lookup; `None` for codes outside the supported set.
    pub fn from_code(code: &str) -> Option<Region> {
        match code.to_uppercase().as_str() {
            "ME" => Some(Region::Me),
            "IND" => Some(Region::Ind),
            "ID" => Some(Region::Id),
            "VN" => Some(Region::Vn),
            "TH" => Some(Region::Th),
            "BD" => Some(Region::Bd),
            "PK" => Some(Region::Pk),
            "TW" => Some(Region::Tw),
            "EU" => Some(Region::Eu),
            "RU" => Some(Region::Ru),
            "NA" => Some(Region::Na),
            "SAC" => Some(Region::Sac),
            "BR" => Some(Region::Br),
            _ => None,
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Ind
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
