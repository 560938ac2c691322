//! Accessory registry
//!
//! Owns the live and desired name indexes. The live index maps display names
//! to the accessory records known to the host; the desired index mirrors the
//! configured tv list. Invariant: after a reconciliation pass the live name
//! set equals the desired name set restricted to entries that were added.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::warn;

use bravia_accessory::Accessory;
use bravia_config::TvConfig;

/// Name-keyed live and desired sets
#[derive(Default)]
pub struct AccessoryRegistry {
    /// Live set: display name -> accessory record
    live: DashMap<String, Arc<Accessory>>,

    /// Desired set: display name -> config entry
    desired: DashMap<String, TvConfig>,
}

impl AccessoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the desired set from the configured tv list.
    ///
    /// Duplicate names keep the later entry (last write wins, as the config
    /// schema inherited) and are surfaced with a warning.
    pub fn set_desired(&self, tvs: &[TvConfig]) {
        self.desired.clear();
        for tv in tvs {
            if self.desired.insert(tv.name.clone(), tv.clone()).is_some() {
                warn!(
                    "Duplicate tv name '{}' in config, keeping the last entry",
                    tv.name
                );
            }
        }
    }

    /// Check whether a name is in the desired set
    pub fn is_desired(&self, name: &str) -> bool {
        self.desired.contains_key(name)
    }

    /// Get the live record for a name
    pub fn get(&self, name: &str) -> Option<Arc<Accessory>> {
        self.live.get(name).map(|r| Arc::clone(r.value()))
    }

    /// Insert a record into the live set
    pub fn insert(&self, accessory: Arc<Accessory>) {
        self.live
            .insert(accessory.display_name.clone(), accessory);
    }

    /// Remove a record from the live set
    pub fn remove(&self, name: &str) -> Option<Arc<Accessory>> {
        self.live.remove(name).map(|(_, accessory)| accessory)
    }

    /// Live records whose names are absent from the desired set
    pub fn orphans(&self) -> Vec<Arc<Accessory>> {
        self.live
            .iter()
            .filter(|r| !self.desired.contains_key(r.key()))
            .map(|r| Arc::clone(r.value()))
            .collect()
    }

    /// Names in the live set
    pub fn live_names(&self) -> Vec<String> {
        self.live.iter().map(|r| r.key().clone()).collect()
    }

    /// Count of live records
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Check if the live set is empty
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate over the live records
    pub fn iter(&self) -> impl Iterator<Item = Arc<Accessory>> + '_ {
        self.live.iter().map(|r| Arc::clone(r.value()))
    }
}
