use std::net::SocketAddr;

use palindrome_labels_core::error::{PolicyError, Result};
use palindrome_labels_core::Settings;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    #[serde(default)]
    pub host: HostSection,

    /// Settings handed to the policy for every `/validate` request.
    #[serde(default)]
    pub policy: Settings,
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PolicyError::UnsupportedVersion);
        }

        self.host.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl HostSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            PolicyError::InvalidConfig(format!(
                "host.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
