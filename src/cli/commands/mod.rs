pub mod checkin;
pub mod config;
pub mod home;
pub mod init;
pub mod log;
