//! Domain models for the Crop Advisor platform

mod analysis;
mod classification;
mod farm;
mod pest;
mod soil;
mod weather;

pub use analysis::*;
pub use classification::*;
pub use farm::*;
pub use pest::*;
pub use soil::*;
pub use weather::*;
