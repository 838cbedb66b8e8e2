use std::path::{Path, PathBuf};

use crate::Error;

pub const DEFAULT_REFRESH_INTERVAL: u64 = 5;

#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub client_id: String,
    pub access_token: String,
    pub user_id: String,
    /// Seconds between polls
    pub refresh_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            access_token: String::new(),
            user_id: String::new(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &redacted(&self.client_id))
            .field("access_token", &redacted(&self.access_token))
            .field("user_id", &self.user_id)
            .field("refresh_interval", &self.refresh_interval)
            .finish()
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        let missing: Vec<_> = [
            ("client_id", &self.client_id),
            ("access_token", &self.access_token),
            ("user_id", &self.user_id),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.trim().is_empty().then_some(name))
        .collect();

        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::Validation(missing))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.trim().to_string(),
            access_token: self.access_token.trim().to_string(),
            user_id: self.user_id.trim().to_string(),
        }
    }

    // a zero interval would spin
    pub fn refresh_interval(&self) -> u64 {
        self.refresh_interval.max(1)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub access_token: String,
    pub user_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &redacted(&self.client_id))
            .field("access_token", &redacted(&self.access_token))
            .field("user_id", &self.user_id)
            .finish()
    }
}

fn redacted(s: &str) -> String {
    s.chars().map(|_| 'x').collect()
}

#[derive(Default, serde::Serialize, serde::Deserialize)]
struct ConfigFile {
    #[serde(default)]
    twitch: Config,
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    const APPLICATION: &'static str = "followed_live";

    const DEFAULT_CONFIG: &'static str = r##"
[twitch]
# the `client id` of your application
# you can create one by registering at: https://dev.twitch.tv/console
client_id        = ""

# a user access token for that application with the `user:read:follows` scope
access_token     = ""

# the numeric id of the user whose follows should be watched
user_id          = ""

# seconds between each refresh
refresh_interval = 5
"##;

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn locate() -> Option<Self> {
        Self::get_config_path().map(Self::new)
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|f| f.join(Self::APPLICATION).join("config.toml"))
    }

    pub const fn default_formatted_toml() -> &'static str {
        Self::DEFAULT_CONFIG
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored config, a missing file yields the defaults
    pub fn load(&self) -> Result<Config, Error> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", self.path.display());
                return Ok(Config::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let file: ConfigFile = toml::from_slice(&data)?;
        Ok(file.twitch)
    }

    pub fn save(&self, config: &Config) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let data = toml::to_string(&ConfigFile {
            twitch: config.clone(),
        })?;

        std::fs::write(&self.path, data).map_err(|source| self.io_error(source))?;
        log::debug!("saved config to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::ConfigIo {
            path: self.path.clone(),
            source,
        }
    }
}
