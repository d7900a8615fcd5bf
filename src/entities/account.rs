use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub spotify_id: String,
    pub spotify_token: String
}

/// What the account file holds on disk.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct AccountsFile {
    pub next_id: u64,
    pub accounts: Vec<Account>
}

impl AccountsFile {
    pub fn find(&self, spotify_id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.spotify_id == spotify_id)
    }

    /// Replaces the token of the account with `spotify_id`, or creates it.
    /// Returns the stored account and whether it was created.
    pub fn upsert_token(&mut self, spotify_id: &str, token: &str) -> (Account, bool) {
        if let Some(account) = self.accounts.iter_mut().find(|account| account.spotify_id == spotify_id) {
            account.spotify_token = token.to_string();
            return (account.clone(), false);
        }

        self.next_id += 1;

        let account = Account {
            id: self.next_id,
            spotify_id: spotify_id.to_string(),
            spotify_token: token.to_string()
        };

        self.accounts.push(account.clone());

        (account, true)
    }
}
