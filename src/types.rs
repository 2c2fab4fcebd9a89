//! Public types: the upload job configuration consumed by discovery and the scan settings.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;

use crate::utils::config::{ScanDefaults, WorkerThreadLimits};

/// Ordered list of locations handed from discovery to the parallel scan. Duplicates are harmless.
pub type LocationList = Vec<PathBuf>;

/// Label as the upstream schema serializes it: a bare abbreviation or an object carrying one.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Abbreviation(String),
    Object { abbreviation: String },
}

/// Deserialize a label and return its trimmed, non-empty abbreviation.
fn deserialize_abbreviation<'de, D>(deserializer: D, kind: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = match RawLabel::deserialize(deserializer)? {
        RawLabel::Abbreviation(s) | RawLabel::Object { abbreviation: s } => s,
    };
    let s = s.trim();
    if s.is_empty() {
        return Err(serde::de::Error::custom(format!(
            "{kind} abbreviation must not be empty"
        )));
    }
    Ok(s.to_string())
}

/// Acquisition platform. Only SmartSPIM changes discovery; everything else is carried as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    SmartSpim,
    Other(String),
}

impl Platform {
    pub fn abbreviation(&self) -> &str {
        match self {
            Platform::SmartSpim => "SmartSPIM",
            Platform::Other(s) => s,
        }
    }
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("SmartSPIM") {
            Platform::SmartSpim
        } else {
            Platform::Other(s.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_abbreviation(deserializer, "platform").map(|s| Platform::from(s.as_str()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Data modality of one source directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modality {
    Spim,
    Ecephys,
    Behavior,
    BehaviorVideos,
    Pophys,
    Confocal,
    Mri,
    Other(String),
}

impl Modality {
    const KNOWN: [(&'static str, Modality); 7] = [
        ("SPIM", Modality::Spim),
        ("ecephys", Modality::Ecephys),
        ("behavior", Modality::Behavior),
        ("behavior-videos", Modality::BehaviorVideos),
        ("pophys", Modality::Pophys),
        ("confocal", Modality::Confocal),
        ("MRI", Modality::Mri),
    ];

    pub fn abbreviation(&self) -> &str {
        if let Modality::Other(s) = self {
            return s;
        }
        Self::KNOWN
            .iter()
            .find(|(_, m)| m == self)
            .map(|(abbr, _)| *abbr)
            .unwrap_or_default()
    }
}

impl From<&str> for Modality {
    fn from(s: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|(abbr, _)| abbr.eq_ignore_ascii_case(s))
            .map(|(_, m)| m.clone())
            .unwrap_or_else(|| Modality::Other(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Modality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_abbreviation(deserializer, "modality").map(|s| Modality::from(s.as_str()))
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// One modality entry of an upload job: what kind of data, and where it lives.
#[derive(Clone, Debug, Deserialize)]
pub struct ModalityConfig {
    pub modality: Modality,
    pub source: PathBuf,
}

/// The part of an upload job configuration the pre-flight check reads. Never mutated.
///
/// Other fields of the upstream configuration (project, subject, bucket, ...) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadJobConfig {
    pub platform: Platform,
    #[serde(default)]
    pub metadata_dir: Option<PathBuf>,
    pub modalities: Vec<ModalityConfig>,
}

impl UploadJobConfig {
    /// True when `modality` on this job's platform gets fixed-depth pre-expansion.
    pub fn needs_deep_expansion(&self, modality: &Modality) -> bool {
        *modality == Modality::Spim && self.platform == Platform::SmartSpim
    }
}

/// Tuning for one run: fan-out and SmartSPIM expansion depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSettings {
    /// Number of partitions the location list is split into.
    pub partition_count: usize,
    /// Fixed directory levels validated during discovery before scan units are collected.
    pub deep_expansion_levels: usize,
    /// Worker pool size. When None, `min(partitions, available threads)`.
    pub num_workers: Option<usize>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            partition_count: ScanDefaults::PARTITION_COUNT,
            deep_expansion_levels: ScanDefaults::DEEP_EXPANSION_LEVELS,
            num_workers: None,
        }
    }
}

impl ScanSettings {
    /// Partitions actually used for `n_locations`: at least one, at most one per location.
    pub fn effective_partitions(&self, n_locations: usize) -> usize {
        self.partition_count.clamp(1, n_locations.max(1))
    }

    /// Worker threads for `partitions` partitions. Excess partitions queue behind workers.
    pub fn effective_workers(&self, partitions: usize) -> usize {
        let wanted = self
            .num_workers
            .unwrap_or_else(|| WorkerThreadLimits::current().all_threads);
        wanted.clamp(1, partitions.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_from_abbreviation_is_case_insensitive() {
        assert_eq!(Platform::from("smartspim"), Platform::SmartSpim);
        assert_eq!(
            Platform::from("ecephys"),
            Platform::Other("ecephys".to_string())
        );
    }

    #[test]
    fn modality_abbreviation_round_trips_known_values() {
        for (abbr, m) in Modality::KNOWN.iter() {
            assert_eq!(Modality::from(*abbr), *m);
            assert_eq!(m.abbreviation(), *abbr);
        }
        assert_eq!(Modality::Other("ephys".into()).abbreviation(), "ephys");
    }

    #[test]
    fn partitions_clamped_to_location_count() {
        let s = ScanSettings::default();
        assert_eq!(s.effective_partitions(5), 5);
        assert_eq!(s.effective_partitions(100), 20);
        assert_eq!(s.effective_partitions(0), 1);
        let zero = ScanSettings {
            partition_count: 0,
            ..ScanSettings::default()
        };
        assert_eq!(zero.effective_partitions(10), 1);
    }

    #[test]
    fn workers_never_exceed_partitions() {
        let s = ScanSettings {
            num_workers: Some(64),
            ..ScanSettings::default()
        };
        assert_eq!(s.effective_workers(3), 3);
        let s = ScanSettings {
            num_workers: Some(0),
            ..ScanSettings::default()
        };
        assert_eq!(s.effective_workers(3), 1);
    }
}
