pub mod reports;
pub mod site;
pub mod tester;

pub use site::{CheckFailure, SimulatedSite};
pub use tester::*;
