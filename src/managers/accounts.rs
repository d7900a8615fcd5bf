use std::path::PathBuf;
use async_trait::async_trait;
use log::info;
use thiserror::Error;
use tokio::sync::Mutex;
use crate::entities::account::{Account, AccountsFile};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Couldn't access the account file {path}: {source}")]
    File {
        path: PathBuf,
        source: confy::ConfyError
    },
    #[error("Writing the account file was interrupted: {0}")]
    Interrupted(#[from] tokio::task::JoinError)
}

/// Accounts keyed by their Spotify user id.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Account>, StoreError>;

    /// Stores `token` for `spotify_id`, creating the account on first login.
    async fn upsert_token(&self, spotify_id: &str, token: &str) -> Result<Account, StoreError>;

    async fn list(&self) -> Result<Vec<Account>, StoreError>;
}

#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<AccountsFile>
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.lock().await.find(spotify_id).cloned())
    }

    async fn upsert_token(&self, spotify_id: &str, token: &str) -> Result<Account, StoreError> {
        let (account, created) = self.accounts.lock().await.upsert_token(spotify_id, token);

        if created {
            info!("Creating user! {}", spotify_id);
        }

        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.lock().await.accounts.clone())
    }
}

/// Keeps the accounts in a TOML file, rewritten after every change.
pub struct FileAccountStore {
    path: PathBuf,
    accounts: Mutex<AccountsFile>
}

impl FileAccountStore {
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let accounts = confy::load_path(&path).map_err(|source| StoreError::File {
            path: path.clone(),
            source
        })?;

        Ok(Self {
            path,
            accounts: Mutex::new(accounts)
        })
    }

    async fn write(&self, accounts: AccountsFile) -> Result<(), StoreError> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || {
            confy::store_path(&path, &accounts).map_err(|source| StoreError::File {
                path,
                source
            })
        }).await?
    }
}

#[async_trait]
impl AccountStore for FileAccountStore {
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.lock().await.find(spotify_id).cloned())
    }

    async fn upsert_token(&self, spotify_id: &str, token: &str) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.lock().await;

        let mut updated = accounts.clone();
        let (account, created) = updated.upsert_token(spotify_id, token);

        // Memory only follows once the file has it.
        self.write(updated.clone()).await?;
        *accounts = updated;

        if created {
            info!("Creating user! {}", spotify_id);
        }

        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.lock().await.accounts.clone())
    }
}
