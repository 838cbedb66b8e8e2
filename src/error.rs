use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required settings: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("unauthorized: please check your access token")]
    Unauthorized,

    #[error("api error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] ureq::Transport),

    #[error("cannot decode the response: {0}")]
    Decode(#[source] std::io::Error),

    #[error("the monitor is already running")]
    AlreadyRunning,

    #[error("cannot start the polling thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("cannot access {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_lists_missing_fields() {
        let err = Error::Validation(vec!["client_id", "user_id"]);
        assert_eq!(
            err.to_string(),
            "missing required settings: client_id, user_id"
        );
    }

    #[test]
    fn api_error_carries_status_and_body() {
        let err = Error::Api {
            status: 503,
            body: "service unavailable".into(),
        };
        assert_eq!(err.to_string(), "api error (503): service unavailable");
    }
}
