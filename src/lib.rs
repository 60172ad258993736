pub mod api;
pub mod config;
pub mod ddns;
pub mod error;
pub mod ip;

pub use config::Config;
pub use ddns::{Ddns, Outcome, Resolved};
pub use error::{DdnsError, Result};
