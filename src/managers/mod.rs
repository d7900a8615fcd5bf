pub mod accounts;
pub mod activity;
pub mod discography;
pub mod sessions;
pub mod spotify;
