pub mod checkin;
pub mod config;
pub mod diagnostics;
pub mod flow;
pub mod log;
pub mod map;
pub mod profile;
