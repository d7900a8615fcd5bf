pub mod account;
pub mod album;
pub mod config;
pub mod playing;
pub mod spotify;
