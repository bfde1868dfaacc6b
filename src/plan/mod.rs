mod report;
mod required_work;
mod vacation;

pub use report::*;
pub use required_work::*;
pub use vacation::*;
