pub mod config;
pub mod driver;
pub mod io;
pub mod time;

pub use time::EPOCH;
