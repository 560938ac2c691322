//! Capability services
//!
//! A service bundles one controllable capability of an accessory. Services are
//! plain records linked by subtype key, so a restored accessory can be
//! re-wired without knowing which concrete services the cache holds.

use serde::{Deserialize, Serialize};

/// Kind of capability service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Television power/input control
    Television,
    /// Television volume control
    TelevisionSpeaker,
    /// A selectable input (HDMI port, app, channel)
    InputSource,
}

/// One capability service attached to an accessory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service kind
    pub kind: ServiceKind,

    /// Display name of the service
    pub name: String,

    /// Subtype key, unique per (kind, accessory)
    pub subtype: String,

    /// Subtype keys of services linked to this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked: Vec<String>,
}

impl Service {
    /// Create a new service
    pub fn new(kind: ServiceKind, name: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            subtype: subtype.into(),
            linked: Vec::new(),
        }
    }

    /// Link another service by its subtype key; linking twice is a no-op
    pub fn add_linked(&mut self, subtype: impl Into<String>) {
        let subtype = subtype.into();
        if !self.linked.contains(&subtype) {
            self.linked.push(subtype);
        }
    }

    /// Check whether this is a restored input service
    pub fn is_input(&self) -> bool {
        self.kind == ServiceKind::InputSource || self.subtype.contains("Input")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_linked_is_idempotent() {
        let mut tv = Service::new(ServiceKind::Television, "LivingRoom", "LivingRoom");
        tv.add_linked("LivingRoom Speaker");
        tv.add_linked("LivingRoom Speaker");
        assert_eq!(tv.linked, vec!["LivingRoom Speaker".to_string()]);
    }

    #[test]
    fn test_is_input() {
        let input = Service::new(ServiceKind::InputSource, "HDMI 1", "HDMI 1 Input");
        assert!(input.is_input());

        let speaker = Service::new(ServiceKind::TelevisionSpeaker, "A Speaker", "A Speaker");
        assert!(!speaker.is_input());
    }
}
