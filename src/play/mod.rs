pub mod advice;
pub mod club;
pub mod view;

pub use advice::{LiveAdvice, advice_from_fix, estimate_advice};
pub use club::{Club, recommend_club};
pub use view::{ActiveMarker, HoleView, LocationStatus};
