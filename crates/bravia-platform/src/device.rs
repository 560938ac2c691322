//! The device controller seam
//!
//! One controller per accessory owns the Bravia protocol client, state
//! polling and command translation. The platform only constructs it; nothing
//! is awaited back, and the controller must not touch the registry's indexes.

use std::sync::Arc;

use bravia_accessory::Accessory;

/// Constructs a device controller bound to an accessory.
///
/// The controller reads `accessory.context` for its connection parameters and
/// manages its own lifecycle.
pub trait DeviceFactory: Send + Sync {
    fn create(&self, accessory: Arc<Accessory>);
}
