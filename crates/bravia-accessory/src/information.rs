//! Accessory identification metadata

use serde::{Deserialize, Serialize};

/// Manufacturer string published on every accessory
pub const MANUFACTURER: &str = "SeydX";

/// Model string published on every accessory
pub const MODEL: &str = "Sony";

/// Derive the serial number from an IP address by stripping the delimiters
pub fn serial_from_ip(ip: &str) -> String {
    ip.chars().filter(|c| *c != '.' && *c != ':').collect()
}

/// The identification characteristics of an accessory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryInformation {
    pub name: String,
    pub identify: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub firmware_revision: String,
}

impl AccessoryInformation {
    /// Build the identification block for a named accessory at the given IP
    pub fn new(display_name: &str, ip: &str) -> Self {
        Self {
            name: display_name.to_string(),
            identify: display_name.to_string(),
            manufacturer: MANUFACTURER.to_string(),
            model: MODEL.to_string(),
            serial_number: serial_from_ip(ip),
            firmware_revision: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_from_ip() {
        assert_eq!(serial_from_ip("192.168.1.10"), "192168110");
        assert_eq!(serial_from_ip("fe80::1"), "fe801");
    }

    #[test]
    fn test_information_block() {
        let info = AccessoryInformation::new("LivingRoom", "192.168.1.10");
        assert_eq!(info.name, "LivingRoom");
        assert_eq!(info.identify, "LivingRoom");
        assert_eq!(info.manufacturer, MANUFACTURER);
        assert_eq!(info.model, MODEL);
        assert_eq!(info.serial_number, "192168110");
        assert_eq!(info.firmware_revision, env!("CARGO_PKG_VERSION"));
    }
}
