use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::{Debug, Display, Formatter};
use tracing::{debug, instrument};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
            Platform::Other => write!(f, "other"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Permission {
    Granted,
    Denied,
}

/// Grants or denies access to the device location.
#[async_trait]
pub trait PermissionGate: Debug + Send + Sync {
    async fn request(&self) -> Permission;
}

/// A permission gate answering from configuration.
///
/// Only Android asks for the fine location permission, every other platform is denied.
#[derive(Debug, Clone)]
pub struct ConfiguredPermissionGate {
    platform: Platform,
    granted: bool,
}

impl ConfiguredPermissionGate {
    pub fn new(platform: Platform, granted: bool) -> Self {
        ConfiguredPermissionGate { platform, granted }
    }
}

#[async_trait]
impl PermissionGate for ConfiguredPermissionGate {
    #[instrument(skip_all, fields(platform = %self.platform))]
    async fn request(&self) -> Permission {
        let permission = match self.platform {
            Platform::Android if self.granted => Permission::Granted,
            _ => Permission::Denied,
        };

        debug!(?permission, "🔐 Requested location permission");
        permission
    }
}
