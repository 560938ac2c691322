//! Bravia platform adapter
//!
//! Keeps the host runtime's persistent accessory set in sync with the
//! configured tv list. The adapter owns only reconciliation bookkeeping:
//! which accessories to add, keep or remove when configuration changes, and
//! how cached records are wired back into the object model. All device I/O
//! lives behind the [`DeviceFactory`] seam.

mod device;
mod host;
mod platform;
mod registry;

pub use device::DeviceFactory;
pub use host::{ApiVersion, HostRuntime};
pub use platform::{
    BraviaPlatform, PlatformError, PlatformResult, MIN_API_VERSION, PLATFORM_NAME, PLUGIN_NAME,
};
pub use registry::AccessoryRegistry;
