mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

pub mod config;
pub mod errors;
pub mod util;

#[cfg(test)]
mod test_fixtures;
