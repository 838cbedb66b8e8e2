// Note: You must register an application at https://dev.twitch.tv/console
// and create a user access token with the `user:read:follows` scope

mod args;
pub use args::Args;

mod config;
pub use config::{Config, ConfigStore, Credentials, DEFAULT_REFRESH_INTERVAL};

mod error;
pub use error::Error;

mod event;
pub use event::{Alert, Bell, Event, Presenter, Silent};

mod http;
pub use http::{Fetcher, HelixClient, HELIX_BASE};

mod monitor;
pub use monitor::{Monitor, StopHandle, BACKOFF_UNITS};

mod render;
pub use render::{Entries, Render, Style, Terminal, Theme};

mod snapshot;
pub use snapshot::{Diff, Snapshot};

mod stream;
pub use stream::{StreamKind, StreamRecord};

mod string;
pub mod util;
