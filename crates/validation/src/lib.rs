//! Field, entity and form validation plus input sanitization.
//! Synchronous throughout: nothing here suspends or spawns.

mod field;
mod form;
mod patterns;
mod rule;
mod sanitize;
mod server;

pub use field::*;
pub use form::*;
pub use patterns::{EMAIL, PHONE, WEBSITE};
pub use rule::*;
pub use sanitize::*;
pub use server::*;
