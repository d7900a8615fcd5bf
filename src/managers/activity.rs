use log::info;
use serde::Serialize;
use crate::entities::account::Account;
use crate::utils::time::utc_timestamp;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "logout")]
    Logout,
    #[serde(rename = "reload")]
    Reload,
    #[serde(rename = "tick-5m")]
    Tick5m
}

#[derive(Serialize, Debug)]
pub struct ActivityRecord<'a> {
    pub user_id: u64,
    pub spotify_id: &'a str,
    pub timestamp: String,
    pub action: Action
}

impl<'a> ActivityRecord<'a> {
    pub fn new(account: &'a Account, action: Action) -> Self {
        Self {
            user_id: account.id,
            spotify_id: &account.spotify_id,
            timestamp: utc_timestamp(),
            action
        }
    }
}

pub fn log_activity(account: &Account, action: Action) {
    match serde_json::to_string(&ActivityRecord::new(account, action)) {
        Ok(line) => info!("{}", line),
        Err(err) => info!("{:?} by user {}: {}", action, account.id, err)
    }
}
