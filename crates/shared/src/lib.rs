mod error;
mod report;
mod store;
pub mod task;
pub mod user;

pub use error::*;
pub use report::*;
pub use store::*;
