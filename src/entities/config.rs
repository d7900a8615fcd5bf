use serde::{Deserialize, Serialize};

pub const SPOTIFY_SCOPES: &str = "user-read-private user-read-email user-read-playback-state user-read-currently-playing";

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConfigFileSpotify {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub scopes: String,
    pub accounts_url: String,
    pub api_url: String
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConfigFileGeneralWebServer {
    pub host_address: String,
    pub port: u16,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConfigFileStorage {
    /// When empty, accounts only live for the lifetime of the process.
    pub accounts_path: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConfigFileGeneral {
    pub web_server: ConfigFileGeneralWebServer,
    pub storage: ConfigFileStorage,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConfigFile {
    pub general: ConfigFileGeneral,
    pub spotify: ConfigFileSpotify,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            general: ConfigFileGeneral {
                web_server: ConfigFileGeneralWebServer {
                    host_address: "127.0.0.1".to_string(),
                    port: 8080
                },
                storage: ConfigFileStorage {
                    accounts_path: "accounts.toml".to_string()
                }
            },

            spotify: ConfigFileSpotify {
                client_id: "".to_string(),
                client_secret: "".to_string(),
                callback_url: "http://localhost:8080/callback/".to_string(),
                scopes: SPOTIFY_SCOPES.to_string(),
                accounts_url: "https://accounts.spotify.com".to_string(),
                api_url: "https://api.spotify.com/v1".to_string()
            }
        }
    }
}

impl ConfigFile {
    pub fn get_auth_base64(&self) -> String {
        base64::encode(format!("{}:{}", &self.spotify.client_id, &self.spotify.client_secret))
    }

    pub fn get_webserver_address(&self) -> (String, u16) {
        (String::from(&self.general.web_server.host_address), self.general.web_server.port)
    }

    /// Values from the environment win over the ones stored in the file.
    pub fn apply_env<F>(&mut self, lookup: F)
        where F: Fn(&str) -> Option<String>
    {
        if let Some(client_id) = lookup("SPOTIFY_CLIENT_ID") {
            self.spotify.client_id = client_id;
        }
        if let Some(client_secret) = lookup("SPOTIFY_CLIENT_SECRET") {
            self.spotify.client_secret = client_secret;
        }
        if let Some(callback_url) = lookup("SPOTIFY_REDIRECT_URL") {
            self.spotify.callback_url = callback_url;
        }
    }

    /// Returns the name of the first required value that is still empty.
    pub fn missing_value(&self) -> Option<&'static str> {
        if self.spotify.client_id.is_empty() {
            return Some("spotify.client_id");
        }
        if self.spotify.client_secret.is_empty() {
            return Some("spotify.client_secret");
        }
        if self.spotify.callback_url.is_empty() {
            return Some("spotify.callback_url");
        }

        None
    }
}
