#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod coerce;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{ClientError, Error, HttpFailure, Result};
pub use traits::SearchClient;
