use std::time::Duration;

use crate::{stream::Resp, Credentials, Error, StreamRecord};

pub const HELIX_BASE: &str = "https://api.twitch.tv/helix";

pub trait Fetcher: Send + Sync {
    /// Fetches the followed channels that are currently live
    fn fetch_followed(&self, credentials: &Credentials) -> Result<Vec<StreamRecord>, Error>;
}

pub struct HelixClient {
    base: String,
    agent: ureq::Agent,
}

impl Default for HelixClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HelixClient {
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> Self {
        Self::with_base_url(HELIX_BASE)
    }

    pub fn with_base_url(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().timeout(Self::TIMEOUT).build(),
        }
    }
}

impl Fetcher for HelixClient {
    fn fetch_followed(&self, credentials: &Credentials) -> Result<Vec<StreamRecord>, Error> {
        let ep = format!("{}/streams/followed", self.base);
        log::trace!("fetching {} for {}", ep, credentials.user_id);

        let resp = self
            .agent
            .get(&ep)
            .query("user_id", &credentials.user_id)
            .query("first", "100")
            .set("Client-ID", &credentials.client_id)
            .set(
                "Authorization",
                &format!("Bearer {}", credentials.access_token),
            )
            .call();

        let resp = match resp {
            Ok(resp) => resp,
            Err(ureq::Error::Status(401, _)) => return Err(Error::Unauthorized),
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                return Err(Error::Api { status, body });
            }
            Err(ureq::Error::Transport(transport)) => return Err(transport.into()),
        };

        // ureq only reports 4xx/5xx as errors
        if resp.status() != 200 {
            let status = resp.status();
            let body = resp.into_string().unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        let streams = resp
            .into_json::<Resp<StreamRecord>>()
            .map_err(Error::Decode)?
            .data;

        log::debug!("{} followed streams are live", streams.len());
        Ok(streams)
    }
}
