mod document;
mod eligibility;
mod holiday;
mod request;

pub use document::*;
pub use eligibility::*;
pub use holiday::*;
pub use request::*;
