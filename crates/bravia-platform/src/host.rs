//! The host runtime seam
//!
//! The host persists accessories across restarts and exposes the register and
//! unregister primitives; everything else about it stays opaque here.

use std::fmt;
use std::sync::Arc;

use bravia_accessory::Accessory;

/// Host API version as advertised on the API handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The host runtime the platform registers accessories with
pub trait HostRuntime: Send + Sync {
    /// Version of the host API handle
    fn api_version(&self) -> ApiVersion;

    /// Register newly created accessories, tagged with the plugin and
    /// platform identifiers
    fn register_accessories(&self, plugin: &str, platform: &str, accessories: &[Arc<Accessory>]);

    /// Unregister accessories that are no longer configured
    fn unregister_accessories(&self, plugin: &str, platform: &str, accessories: &[Arc<Accessory>]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::new(2, 1) < ApiVersion::new(2, 2));
        assert!(ApiVersion::new(1, 9) < ApiVersion::new(2, 0));
        assert!(ApiVersion::new(3, 0) > ApiVersion::new(2, 2));
        assert_eq!(ApiVersion::new(2, 2), ApiVersion::new(2, 2));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(ApiVersion::new(2, 2).to_string(), "2.2");
    }
}
