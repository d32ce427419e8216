mod builder;
mod client;
mod error;

pub use builder::Builder;
pub use client::{Client, SetupPage};
pub use error::Error;
