use serde::{Deserialize, Serialize};
use std::fmt;

/// Clubs the advisor can suggest, declared from shortest to longest carry
///
/// The derived `Ord` therefore compares by carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Club {
    #[serde(rename = "putter")]
    Putter,
    #[serde(rename = "sand-wedge")]
    SandWedge,
    #[serde(rename = "pitching-wedge")]
    PitchingWedge,
    #[serde(rename = "9-iron")]
    NineIron,
    #[serde(rename = "7-iron")]
    SevenIron,
    #[serde(rename = "5-iron")]
    FiveIron,
    #[serde(rename = "3-wood")]
    ThreeWood,
    #[serde(rename = "driver")]
    Driver,
}

impl Club {
    pub fn name(self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::ThreeWood => "3-wood",
            Club::FiveIron => "5-iron",
            Club::SevenIron => "7-iron",
            Club::NineIron => "9-iron",
            Club::PitchingWedge => "Pitching wedge",
            Club::SandWedge => "Sand wedge",
            Club::Putter => "Putter",
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower bounds (exclusive, meters), longest club first
const LADDER: [(f64, Club); 7] = [
    (210.0, Club::Driver),
    (170.0, Club::ThreeWood),
    (145.0, Club::FiveIron),
    (120.0, Club::SevenIron),
    (90.0, Club::NineIron),
    (60.0, Club::PitchingWedge),
    (30.0, Club::SandWedge),
];

/// Suggest a club for the remaining distance in meters
pub fn recommend_club(distance_meters: f64) -> Club {
    LADDER
        .iter()
        .find(|(min, _)| distance_meters > *min)
        .map_or(Club::Putter, |&(_, club)| club)
}
