//! golfgeo - geospatial core for golf course QA and live play distance advice

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod location;
pub mod play;
pub mod qa;
