//! Two-stage parse of serialized job settings.
//!
//! Stage one reads the JSON into a generic [`Value`] and strips fields the upstream schema
//! computes on serialization (they fail strict validation when fed back in). Stage two
//! deserializes the cleaned value into [`UploadJobConfig`] and checks what serde cannot.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::utils::config::{DerivedFields, ScanDefaults};
use crate::{ScanSettings, UploadJobConfig};

/// Parsed job settings: the upload configuration plus scan tuning.
#[derive(Clone, Debug)]
pub struct JobSettings {
    pub upload_configs: UploadJobConfig,
    pub settings: ScanSettings,
}

fn default_partitions() -> usize {
    ScanDefaults::PARTITION_COUNT
}

fn default_levels() -> usize {
    ScanDefaults::DEEP_EXPANSION_LEVELS
}

#[derive(Deserialize)]
struct RawJobSettings {
    upload_configs: Value,
    #[serde(default = "default_partitions", alias = "partition_count")]
    n_partitions: usize,
    #[serde(default = "default_levels", alias = "deep_expansion_levels")]
    num_of_smart_spim_levels: usize,
    #[serde(default)]
    num_workers: Option<usize>,
}

/// Remove derived fields in place: `s3_prefix` at the top level, `output_folder_name` per modality.
pub fn strip_derived_fields(upload_configs: &mut Value) {
    let Some(obj) = upload_configs.as_object_mut() else {
        return;
    };
    for field in DerivedFields::UPLOAD_CONFIG {
        obj.remove(*field);
    }
    if let Some(modalities) = obj.get_mut("modalities").and_then(Value::as_array_mut) {
        for modality in modalities.iter_mut().filter_map(Value::as_object_mut) {
            for field in DerivedFields::MODALITY {
                modality.remove(*field);
            }
        }
    }
}

/// Strip derived fields, then validate into [`UploadJobConfig`]. Accepts the configuration
/// either as an object or as a JSON string holding one.
pub fn parse_upload_configs(upload_configs: Value) -> Result<UploadJobConfig> {
    let mut value = match upload_configs {
        Value::String(s) => {
            serde_json::from_str::<Value>(&s).context("upload_configs string is not valid JSON")?
        }
        v => v,
    };
    strip_derived_fields(&mut value);
    let config: UploadJobConfig =
        serde_json::from_value(value).context("validate upload_configs")?;
    for (i, m) in config.modalities.iter().enumerate() {
        if m.source.as_os_str().is_empty() {
            bail!("modalities[{i}] ({}) has an empty source", m.modality);
        }
    }
    Ok(config)
}

/// Parse the full job settings JSON (`upload_configs`, `n_partitions`, `num_of_smart_spim_levels`).
pub fn parse_job_settings(json: &str) -> Result<JobSettings> {
    let raw: RawJobSettings = serde_json::from_str(json).context("parse job settings JSON")?;
    let upload_configs = parse_upload_configs(raw.upload_configs)?;
    Ok(JobSettings {
        upload_configs,
        settings: ScanSettings {
            partition_count: raw.n_partitions,
            deep_expansion_levels: raw.num_of_smart_spim_levels,
            num_workers: raw.num_workers,
        },
    })
}
