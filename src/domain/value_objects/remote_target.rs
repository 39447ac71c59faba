//! Remote target value object
//!
//! The robot account, address, and deploy directory.

use std::fmt;

use crate::error::{DeployError, DeployResult};

/// Where a deployment lands: `user@host:path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    user: String,
    host: String,
    path: String,
}

impl RemoteTarget {
    /// Create a target, rejecting empty (or whitespace-only) fields.
    pub fn new(
        user: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> DeployResult<Self> {
        let user = user.into();
        let host = host.into();
        let path = path.into();

        for (name, value) in [("remote user", &user), ("remote host", &host), ("remote path", &path)] {
            if value.trim().is_empty() {
                return Err(DeployError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }

        Ok(Self { user, host, path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Destination for the remote-session tool (`user@host`)
    pub fn ssh_destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Destination for the sync tool (`user@host:path`)
    pub fn rsync_destination(&self) -> String {
        format!("{}@{}:{}", self.user, self.host, self.path)
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rsync_destination())
    }
}
