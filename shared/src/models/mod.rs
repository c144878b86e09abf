//! Domain models for the WeFarm diagnosis pipeline

mod diagnosis;
mod history;
mod location;
mod session;
mod weather;

pub use diagnosis::*;
pub use history::*;
pub use location::*;
pub use session::*;
pub use weather::*;
