//! The persistent accessory record
//!
//! The host runtime caches these across restarts; the platform registry is the
//! only writer of the context once a record exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bravia_config::TvConfig;

use crate::information::AccessoryInformation;
use crate::service::{Service, ServiceKind};

/// Derive the stable accessory identifier from its display name.
///
/// UUID v5 over the name, so the same name always maps to the same identity
/// and a cached record can be matched after a restart.
pub fn accessory_id(display_name: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, display_name.as_bytes()).to_string()
}

/// Connection parameters and polling settings for one television
///
/// Copied verbatim from the matching [`TvConfig`]; the registry refreshes this
/// on every reconciliation pass and the device controller only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryContext {
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,
    #[serde(default)]
    pub extra_inputs: bool,
    #[serde(default)]
    pub cec_inputs: bool,
    #[serde(default)]
    pub channel_source: bool,
    #[serde(default)]
    pub channels: Vec<u32>,
    #[serde(default)]
    pub apps: Vec<String>,
    #[serde(default)]
    pub wol: bool,
    /// Poll interval in milliseconds, a single global value
    pub interval_ms: u64,
}

impl AccessoryContext {
    /// Build a context from a config entry. Pure: the same entry and interval
    /// always produce the same context.
    pub fn from_config(tv: &TvConfig, interval_ms: u64) -> Self {
        Self {
            ip: tv.ip.clone(),
            mac: tv.mac.clone(),
            port: tv.port,
            psk: tv.psk.clone(),
            extra_inputs: tv.extra_inputs,
            cec_inputs: tv.cec_inputs,
            channel_source: tv.channel_source,
            channels: tv.channels.clone(),
            apps: tv.apps.clone(),
            wol: tv.wol,
            interval_ms,
        }
    }
}

/// A persistent accessory record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accessory {
    /// Stable identifier, derived from the display name
    pub id: String,

    /// Display name, the reconciliation key
    pub display_name: String,

    /// Connection parameters for the device controller
    pub context: AccessoryContext,

    /// Identification metadata published to the host
    pub information: AccessoryInformation,

    /// Composed capability services
    #[serde(default)]
    pub services: Vec<Service>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last modified timestamp
    #[serde(default = "Utc::now")]
    pub modified_at: DateTime<Utc>,
}

impl Accessory {
    /// Create a new accessory for a config entry
    pub fn new(tv: &TvConfig, interval_ms: u64) -> Self {
        let now = Utc::now();
        Self {
            id: accessory_id(&tv.name),
            display_name: tv.name.clone(),
            context: AccessoryContext::from_config(tv, interval_ms),
            information: AccessoryInformation::new(&tv.name, &tv.ip),
            services: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Attach the default capability set: a Television service and its
    /// TelevisionSpeaker, both keyed by the display name.
    pub fn add_default_services(&mut self) {
        let name = self.display_name.clone();
        let speaker_name = format!("{} Speaker", name);
        self.add_service(Service::new(ServiceKind::Television, name.clone(), name));
        self.add_service(Service::new(
            ServiceKind::TelevisionSpeaker,
            speaker_name.clone(),
            speaker_name,
        ));
    }

    /// Add a service, replacing any existing one with the same kind and subtype
    pub fn add_service(&mut self, service: Service) {
        self.services
            .retain(|s| !(s.kind == service.kind && s.subtype == service.subtype));
        self.services.push(service);
    }

    /// Find a service by kind and subtype
    pub fn service(&self, kind: ServiceKind, subtype: &str) -> Option<&Service> {
        self.services
            .iter()
            .find(|s| s.kind == kind && s.subtype == subtype)
    }

    fn service_mut(&mut self, kind: ServiceKind, subtype: &str) -> Option<&mut Service> {
        self.services
            .iter_mut()
            .find(|s| s.kind == kind && s.subtype == subtype)
    }

    /// Re-link a restored accessory's services: the speaker and every restored
    /// input service get linked back to the main Television service.
    pub fn link_services(&mut self) {
        let speaker_subtype = format!("{} Speaker", self.display_name);
        let input_subtypes: Vec<String> = self
            .services
            .iter()
            .filter(|s| s.is_input())
            .map(|s| s.subtype.clone())
            .collect();

        let television_subtype = self.display_name.clone();
        if let Some(television) = self.service_mut(ServiceKind::Television, &television_subtype) {
            television.add_linked(speaker_subtype);
            for subtype in input_subtypes {
                television.add_linked(subtype);
            }
        }
    }

    /// Refresh the context and identification block from a config entry
    pub fn refresh(&mut self, tv: &TvConfig, interval_ms: u64) {
        self.context = AccessoryContext::from_config(tv, interval_ms);
        self.information = AccessoryInformation::new(&self.display_name, &tv.ip);
        self.modified_at = Utc::now();
    }
}
