//! Schema of the generated project cache
//!
//! The cache is stored at `.devspace/generated.yaml` and records the inputs
//! of previous builds and deployments per profile, so the next run can skip
//! work whose inputs did not change.

use crate::error::{GencacheError, GencacheResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Root of the generated cache, one per project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectCache {
    /// Profile selected for this invocation only. Recomputed on every load,
    /// persisted under its legacy name for compatibility.
    #[serde(
        rename = "lastOverrideProfile",
        skip_serializing_if = "Option::is_none"
    )]
    pub override_profile: Option<String>,

    /// Profile used when no override is given
    #[serde(skip_serializing_if = "String::is_empty")]
    pub active_profile: String,

    /// Free-form variables remembered between runs
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub vars: BTreeMap<String, String>,

    /// Cached state per profile name
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_profiles_as_empty"
    )]
    pub profiles: BTreeMap<String, ProfileCache>,
}

/// Cached build and deploy state of a single profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileCache {
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub deployments: BTreeMap<String, DeploymentEntry>,

    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub images: BTreeMap<String, ImageEntry>,

    /// Resolved dependency versions by dependency name
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub dependencies: BTreeMap<String, String>,

    /// Cluster context used by the last deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_context: Option<LastContext>,
}

/// Last Kubernetes context a profile deployed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastContext {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub context: String,
}

/// Fingerprints of the inputs that produced an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_files_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Fingerprints of the inputs that produced a deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_config_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_overrides_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_chart_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubectl_manifests_hash: Option<String>,
}

impl ProjectCache {
    /// Create an empty cache, as used when no file exists yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the per-invocation profile override.
    ///
    /// A non-empty name becomes the override; `None` or an empty name
    /// clears whatever override was read from disk.
    pub fn apply_override_profile(&mut self, profile: Option<&str>) {
        self.override_profile = profile
            .filter(|name| !name.is_empty())
            .map(str::to_string);
    }

    /// Name of the profile currently in effect
    pub fn active_profile_name(&self) -> &str {
        self.override_profile
            .as_deref()
            .unwrap_or(&self.active_profile)
    }

    /// Make sure `name` has a profile entry, inserting an empty one if needed
    pub fn ensure_profile(&mut self, name: &str) -> &mut ProfileCache {
        if !self.profiles.contains_key(name) {
            debug!("Initializing cache for profile '{}'", name);
        }
        self.profiles.entry(name.to_string()).or_default()
    }

    /// Get the cache of the profile in effect, creating it if missing
    pub fn get_active(&mut self) -> &mut ProfileCache {
        let name = self.active_profile_name().to_string();
        self.ensure_profile(&name)
    }

    /// Look up a profile without creating it
    pub fn profile(&self, name: &str) -> Option<&ProfileCache> {
        self.profiles.get(name)
    }

    /// Replace a profile's cached state with an empty one.
    ///
    /// Returns false if the profile does not exist.
    pub fn reset_profile(&mut self, name: &str) -> bool {
        match self.profiles.get_mut(name) {
            Some(profile) => {
                *profile = ProfileCache::default();
                true
            }
            None => false,
        }
    }
}

impl ProfileCache {
    /// Get the entry for an image, inserting an empty one if missing
    pub fn get_or_create_image(&mut self, name: &str) -> &mut ImageEntry {
        self.images.entry(name.to_string()).or_default()
    }

    /// Get the entry for a deployment, inserting an empty one if missing
    pub fn get_or_create_deployment(&mut self, name: &str) -> &mut DeploymentEntry {
        self.deployments.entry(name.to_string()).or_default()
    }

    /// Record the resolved version of a dependency
    pub fn set_dependency(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.dependencies.insert(name.into(), version.into());
    }

    /// Record the cluster context used by the last deployment
    pub fn set_last_context(&mut self, namespace: impl Into<String>, context: impl Into<String>) {
        self.last_context = Some(LastContext {
            namespace: namespace.into(),
            context: context.into(),
        });
    }

    /// True if nothing has been cached for this profile
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Read an explicit `~`/`null` mapping as an empty one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_empty`], also accepting `name: ~` for a single profile
fn null_profiles_as_empty<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, ProfileCache>, D::Error>
where
    D: Deserializer<'de>,
{
    let profiles: Option<BTreeMap<String, Option<ProfileCache>>> =
        Option::deserialize(deserializer)?;
    Ok(profiles
        .unwrap_or_default()
        .into_iter()
        .map(|(name, profile)| (name, profile.unwrap_or_default()))
        .collect())
}

/// Convert a raw value into an optional field, empty meaning unset
fn field_value(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Fingerprint record addressable by wire field names
pub trait CacheEntry: Default {
    /// Entry kind used in messages
    const KIND: &'static str;

    /// Every field with its wire name and current value
    fn fields(&self) -> Vec<(&'static str, Option<&str>)>;

    /// Set a field by its wire name. An empty value clears the field.
    fn set_field(&mut self, key: &str, value: &str) -> GencacheResult<()>;

    /// Wire names accepted by [`CacheEntry::set_field`]
    fn field_names() -> Vec<&'static str> {
        let entry = Self::default();
        let names = entry.fields().into_iter().map(|(name, _)| name).collect();
        names
    }
}

impl CacheEntry for ImageEntry {
    const KIND: &'static str = "image";

    fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("imageConfigHash", self.image_config_hash.as_deref()),
            ("dockerfileHash", self.dockerfile_hash.as_deref()),
            ("contextHash", self.context_hash.as_deref()),
            ("entrypointHash", self.entrypoint_hash.as_deref()),
            ("customFilesHash", self.custom_files_hash.as_deref()),
            ("imageName", self.image_name.as_deref()),
            ("tag", self.tag.as_deref()),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> GencacheResult<()> {
        let slot = match key {
            "imageConfigHash" => &mut self.image_config_hash,
            "dockerfileHash" => &mut self.dockerfile_hash,
            "contextHash" => &mut self.context_hash,
            "entrypointHash" => &mut self.entrypoint_hash,
            "customFilesHash" => &mut self.custom_files_hash,
            "imageName" => &mut self.image_name,
            "tag" => &mut self.tag,
            _ => {
                return Err(GencacheError::UnknownField {
                    kind: Self::KIND,
                    field: key.to_string(),
                })
            }
        };
        *slot = field_value(value);
        Ok(())
    }
}

impl CacheEntry for DeploymentEntry {
    const KIND: &'static str = "deployment";

    fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("deploymentConfigHash", self.deployment_config_hash.as_deref()),
            ("helmOverridesHash", self.helm_overrides_hash.as_deref()),
            ("helmChartHash", self.helm_chart_hash.as_deref()),
            ("kubectlManifestsHash", self.kubectl_manifests_hash.as_deref()),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> GencacheResult<()> {
        let slot = match key {
            "deploymentConfigHash" => &mut self.deployment_config_hash,
            "helmOverridesHash" => &mut self.helm_overrides_hash,
            "helmChartHash" => &mut self.helm_chart_hash,
            "kubectlManifestsHash" => &mut self.kubectl_manifests_hash,
            _ => {
                return Err(GencacheError::UnknownField {
                    kind: Self::KIND,
                    field: key.to_string(),
                })
            }
        };
        *slot = field_value(value);
        Ok(())
    }
}
