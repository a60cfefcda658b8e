use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for a solar system.
pub type SystemId = i64;

/// Cartesian coordinates for a solar system, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SystemPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A solar system as held by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub id: SystemId,
    pub name: String,
    pub position: SystemPosition,
}

/// Loader-facing record used to populate a [`Catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct SystemRecord {
    pub id: SystemId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SystemRecord {
    pub fn new(id: SystemId, name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
            z,
        }
    }
}

/// Immutable, ordered table of solar systems.
///
/// Storage indices follow the order of the records passed to
/// [`Catalog::build`] and never change afterwards; the spatial index reports
/// its results in the same index space.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: Vec<System>,
    id_to_index: HashMap<SystemId, usize>,
}

impl Catalog {
    /// Build a catalog from loader records.
    ///
    /// Fails with [`Error::DuplicateSystemId`] as soon as an identifier is
    /// seen twice.
    pub fn build<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = SystemRecord>,
    {
        let records = records.into_iter();
        let mut systems = Vec::with_capacity(records.size_hint().0);
        let mut id_to_index = HashMap::with_capacity(records.size_hint().0);

        for record in records {
            let index = systems.len();
            if id_to_index.insert(record.id, index).is_some() {
                return Err(Error::DuplicateSystemId { id: record.id });
            }
            systems.push(System {
                id: record.id,
                name: record.name,
                position: SystemPosition::new(record.x, record.y, record.z),
            });
        }

        debug!(system_count = systems.len(), "built system catalog");

        Ok(Self {
            systems,
            id_to_index,
        })
    }

    /// Number of systems in the catalog.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if the catalog holds no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Iterate systems in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &System> {
        self.systems.iter()
    }

    /// Lookup a system by its case-sensitive name.
    ///
    /// Scans in storage order so that the first inserted system wins when
    /// several share a name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&System> {
        self.systems.iter().find(|system| system.name == name)
    }

    /// Lookup a system by identifier.
    pub fn system(&self, id: SystemId) -> Option<&System> {
        self.index_of(id).map(|index| &self.systems[index])
    }

    /// Lookup a system by storage index.
    pub fn system_at(&self, index: usize) -> Option<&System> {
        self.systems.get(index)
    }

    /// Storage index assigned to a system identifier.
    pub fn index_of(&self, id: SystemId) -> Option<usize> {
        self.id_to_index.get(&id).copied()
    }

    /// Position of a system identifier.
    pub fn position_of(&self, id: SystemId) -> Option<SystemPosition> {
        self.system(id).map(|system| system.position)
    }

    /// Lookup a system name by identifier.
    pub fn system_name(&self, id: SystemId) -> Option<&str> {
        self.system(id).map(|system| system.name.as_str())
    }

    /// All positions in storage order.
    pub fn positions(&self) -> Vec<SystemPosition> {
        self.systems.iter().map(|system| system.position).collect()
    }

    /// Names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.8;

        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .systems
            .iter()
            .map(|system| {
                let score = strsim::jaro_winkler(&needle, &system.name.to_lowercase());
                (score, system.name.as_str())
            })
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let mut names: Vec<String> = Vec::with_capacity(limit);
        for (_, candidate) in scored {
            if names.len() >= limit {
                break;
            }
            if !names.iter().any(|existing| existing == candidate) {
                names.push(candidate.to_string());
            }
        }
        names
    }
}
