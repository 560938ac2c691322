//! Accessory object model for the Bravia bridge
//!
//! An [`Accessory`] is the persistent record the host runtime stores across
//! restarts. Capabilities are composed from independent [`Service`] records
//! (Television, TelevisionSpeaker, InputSource) rather than inherited, and the
//! connection parameters live in an explicit [`AccessoryContext`] instead of a
//! free-form property bag.

mod accessory;
mod information;
mod service;

pub use accessory::{accessory_id, Accessory, AccessoryContext};
pub use information::{serial_from_ip, AccessoryInformation, MANUFACTURER, MODEL};
pub use service::{Service, ServiceKind};
