use std::path::PathBuf;
use std::sync::Arc;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use crate::config::config::{Config, ConfigError};
use crate::entities::config::ConfigFile;
use crate::http::spotify::SpotifyHttp;
use crate::managers::accounts::{AccountStore, FileAccountStore, MemoryAccountStore};
use crate::managers::sessions::SessionStore;
use crate::managers::spotify::Spotify;
use crate::routes::{configure_service, WebData};

mod utils;
mod entities;
mod routes;
mod http;
mod config;
mod managers;

#[derive(Parser)]
#[command(name = "baa", version, about = "Shows what you're listening to on Spotify and browses discographies")]
struct Cli {
    /// Configuration file, created with defaults when missing
    #[arg(short, long, default_value = "baa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Print the Spotify id of every known account
    ListAccounts,
}

fn open_account_store(cfg: &ConfigFile) -> anyhow::Result<Arc<dyn AccountStore>> {
    let path = &cfg.general.storage.accounts_path;

    if path.is_empty() {
        info!("No account file configured, accounts are kept in memory.");
        return Ok(Arc::new(MemoryAccountStore::new()));
    }

    Ok(Arc::new(FileAccountStore::open(PathBuf::from(path))?))
}

async fn serve(cfg: ConfigFile, accounts: Arc<dyn AccountStore>) -> anyhow::Result<()> {
    if let Some(name) = cfg.missing_value() {
        return Err(ConfigError::Missing(name).into());
    }

    let client = reqwest::Client::new();
    let api = Arc::new(SpotifyHttp::new(client, &cfg));

    let address = cfg.get_webserver_address();

    let web_data = WebData {
        config: Arc::new(cfg),
        spotify: Arc::new(Spotify::new(api, accounts)),
        sessions: Arc::new(SessionStore::new())
    };

    info!("Listening on {}:{}", address.0, address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(web_data.clone()))
            .wrap(Logger::default())
            .configure(configure_service)
    })
        .bind(address)?
        .run()
        .await?;

    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().with_colors(true).init()?;

    let cli = Cli::parse();

    let mut cfg: Config<ConfigFile> = Config::load(cli.config)?;
    cfg.cfg.apply_env(|name| std::env::var(name).ok());

    info!("baa, configuration from {}", cfg.path.display());

    let accounts = open_account_store(&cfg.cfg)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg.cfg, accounts).await,
        Command::ListAccounts => {
            for account in accounts.list().await? {
                println!("{}", account.spotify_id);
            }
            Ok(())
        }
    }
}
