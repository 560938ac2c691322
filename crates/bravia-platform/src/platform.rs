//! The platform entry point
//!
//! Constructed once by the host; reconciliation runs synchronously inside the
//! host's lifecycle callbacks (`did_finish_launching`, `configure_accessory`),
//! so no locking beyond the registry's own indexes is needed.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use bravia_accessory::Accessory;
use bravia_config::{ConfigError, PlatformConfig, TvConfig};

use crate::device::DeviceFactory;
use crate::host::{ApiVersion, HostRuntime};
use crate::registry::AccessoryRegistry;

/// Plugin identifier used when registering accessories
pub const PLUGIN_NAME: &str = "homebridge-bravia-tvos";

/// Platform identifier used when registering accessories
pub const PLATFORM_NAME: &str = "BraviaOSPlatform";

/// Oldest host API the platform can run against
pub const MIN_API_VERSION: ApiVersion = ApiVersion::new(2, 2);

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Errors that abort platform initialization
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The host is too old for this platform
    #[error("unexpected host API version {found}, {required} or newer required")]
    IncompatibleApi {
        found: ApiVersion,
        required: ApiVersion,
    },

    /// The platform config section could not be decoded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The Bravia platform adapter
pub struct BraviaPlatform {
    config: PlatformConfig,
    host: Arc<dyn HostRuntime>,
    devices: Arc<dyn DeviceFactory>,
    registry: AccessoryRegistry,
}

impl BraviaPlatform {
    /// Create the platform, failing fast on an incompatible host
    pub fn new(
        config: PlatformConfig,
        host: Arc<dyn HostRuntime>,
        devices: Arc<dyn DeviceFactory>,
    ) -> PlatformResult<Self> {
        let found = host.api_version();
        if found < MIN_API_VERSION {
            return Err(PlatformError::IncompatibleApi {
                found,
                required: MIN_API_VERSION,
            });
        }

        info!(
            "{} v{} by SeydX (https://github.com/SeydX/homebridge-bravia-tvos)",
            PLATFORM_NAME,
            env!("CARGO_PKG_VERSION")
        );

        Ok(Self {
            config,
            host,
            devices,
            registry: AccessoryRegistry::new(),
        })
    }

    /// Create the platform from the host's raw JSON config section
    pub fn from_value(
        config: serde_json::Value,
        host: Arc<dyn HostRuntime>,
        devices: Arc<dyn DeviceFactory>,
    ) -> PlatformResult<Self> {
        Self::new(PlatformConfig::from_value(config)?, host, devices)
    }

    /// The accessory registry
    pub fn registry(&self) -> &AccessoryRegistry {
        &self.registry
    }

    /// Host lifecycle callback: config is final, reconcile the accessory set.
    ///
    /// Runs one pass per configured tv; an empty tv list still runs a single
    /// entry-less pass so stale cached accessories are pruned.
    pub fn did_finish_launching(&self) {
        self.registry.set_desired(&self.config.tvs);

        for tv in &self.config.tvs {
            self.reconcile(Some(tv));
        }

        if self.config.tvs.is_empty() {
            self.reconcile(None);
        }
    }

    /// Host lifecycle callback: one cached accessory restored, in unspecified
    /// order relative to `did_finish_launching`.
    ///
    /// Re-links the speaker and any restored input services to the main
    /// Television service, refreshes the context from the current config and
    /// constructs a device controller when a matching entry exists.
    pub fn configure_accessory(&self, mut accessory: Accessory) {
        accessory.link_services();

        match self.find_config(&accessory.display_name) {
            Some(tv) => {
                info!("Configuring accessory {}", accessory.display_name);
                accessory.refresh(&tv, self.config.poll_interval_ms());

                let accessory = Arc::new(accessory);
                self.registry.insert(Arc::clone(&accessory));
                self.devices.create(accessory);
            }
            None => {
                // No matching config entry; keep the record in the live set
                // so the launch pass can prune it.
                debug!(
                    "Restored accessory {} has no config entry",
                    accessory.display_name
                );
                self.registry.insert(Arc::new(accessory));
            }
        }
    }

    /// One reconciliation pass: add the given entry if it has no live record,
    /// then prune every live record absent from the desired set.
    fn reconcile(&self, entry: Option<&TvConfig>) {
        if let Some(tv) = entry {
            if self.registry.get(&tv.name).is_none() {
                self.add_accessory(tv);
            }
        }

        for accessory in self.registry.orphans() {
            self.remove_accessory(&accessory);
        }
    }

    fn add_accessory(&self, tv: &TvConfig) {
        info!("Adding new accessory: {}", tv.name);

        let mut accessory = Accessory::new(tv, self.config.poll_interval_ms());
        accessory.add_default_services();

        let accessory = Arc::new(accessory);
        self.registry.insert(Arc::clone(&accessory));
        self.host
            .register_accessories(PLUGIN_NAME, PLATFORM_NAME, &[Arc::clone(&accessory)]);
        self.devices.create(accessory);
    }

    fn remove_accessory(&self, accessory: &Arc<Accessory>) {
        warn!(
            "Removing accessory: {}. No longer configured.",
            accessory.display_name
        );

        self.registry.remove(&accessory.display_name);
        self.host
            .unregister_accessories(PLUGIN_NAME, PLATFORM_NAME, &[Arc::clone(accessory)]);
    }

    fn find_config(&self, name: &str) -> Option<TvConfig> {
        self.config.tvs.iter().find(|tv| tv.name == name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeHost {
        version: ApiVersion,
        registered: Mutex<Vec<String>>,
        unregistered: Mutex<Vec<String>>,
    }

    impl FakeHost {
        fn new(version: ApiVersion) -> Self {
            Self {
                version,
                registered: Mutex::new(Vec::new()),
                unregistered: Mutex::new(Vec::new()),
            }
        }
    }

    impl HostRuntime for FakeHost {
        fn api_version(&self) -> ApiVersion {
            self.version
        }

        fn register_accessories(
            &self,
            _plugin: &str,
            _platform: &str,
            accessories: &[Arc<Accessory>],
        ) {
            let mut registered = self.registered.lock().unwrap();
            registered.extend(accessories.iter().map(|a| a.display_name.clone()));
        }

        fn unregister_accessories(
            &self,
            _plugin: &str,
            _platform: &str,
            accessories: &[Arc<Accessory>],
        ) {
            let mut unregistered = self.unregistered.lock().unwrap();
            unregistered.extend(accessories.iter().map(|a| a.display_name.clone()));
        }
    }

    struct NoopFactory;

    impl DeviceFactory for NoopFactory {
        fn create(&self, _accessory: Arc<Accessory>) {}
    }

    #[test]
    fn test_old_host_is_rejected() {
        let host = Arc::new(FakeHost::new(ApiVersion::new(2, 1)));
        let result = BraviaPlatform::new(PlatformConfig::default(), host, Arc::new(NoopFactory));

        assert!(matches!(
            result,
            Err(PlatformError::IncompatibleApi { .. })
        ));
    }

    #[test]
    fn test_compatible_host_is_accepted() {
        let host = Arc::new(FakeHost::new(ApiVersion::new(2, 2)));
        assert!(BraviaPlatform::new(PlatformConfig::default(), host, Arc::new(NoopFactory)).is_ok());
    }

    #[test]
    fn test_invalid_config_section_is_rejected() {
        let host = Arc::new(FakeHost::new(ApiVersion::new(2, 2)));
        let result = BraviaPlatform::from_value(
            serde_json::json!({ "tvs": [{ "name": "NoAddress" }] }),
            host,
            Arc::new(NoopFactory),
        );

        assert!(matches!(result, Err(PlatformError::Config(_))));
    }
}
