mod config;
mod contour;
mod frame;
mod measure;
mod units;
mod warnings;

pub use config::*;
pub use contour::*;
pub use frame::*;
pub use measure::*;
pub use units::*;
pub use warnings::*;
