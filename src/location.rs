//! Resolution of resource names into domain-qualified locations.

use std::fmt::Display;

use getset::Getters;

use crate::error::{ResourceError, Result};

/// Separator between the domain and the path of a resource name.
pub const DOMAIN_SEPARATOR: char = ':';
/// Separator between path segments of a resource name.
pub const PATH_SEPARATOR: char = '/';

/// A resolved, domain-qualified resource location, e.g. `minecraft:block/stone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Getters)]
pub struct ResourceLocation {
    /// Domain (mod id) of the location.
    #[get = "pub"]
    domain: String,
    /// Path segments of the location, never empty.
    #[get = "pub"]
    path: Vec<String>,
}

impl ResourceLocation {
    /// Create a location from a domain and a `/` separated path.
    ///
    /// # Errors
    /// - If the domain or any path segment is empty or malformed
    pub fn new(domain: &str, path: &str) -> Result<Self> {
        resolve(path, domain)
    }

    /// Get the path segments joined with `/`.
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Get the location as `domain:prefix/path`.
    ///
    /// This is how default models and textures are derived from a block or item name,
    /// e.g. `join_prefixed("block")` on `mod:pink_grass` gives `mod:block/pink_grass`.
    #[must_use]
    pub fn join_prefixed(&self, prefix: &str) -> String {
        format!("{}:{}/{}", self.domain, prefix, self.path_string())
    }

    /// Get the default block model (or block texture) for this location.
    #[must_use]
    pub fn block_model(&self) -> String {
        self.join_prefixed("block")
    }

    /// Get the default item model (or item texture) for this location.
    #[must_use]
    pub fn item_model(&self) -> String {
        self.join_prefixed("item")
    }

    /// Get a copy of this location with a suffix appended to the last path segment.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut path = self.path.clone();
        if let Some(last) = path.last_mut() {
            last.push_str(suffix);
        }
        Self {
            domain: self.domain.clone(),
            path,
        }
    }

    /// Get the translation key of this location, e.g. `block.mod.ore.copper`.
    #[must_use]
    pub fn translation_key(&self, kind: &str) -> String {
        format!("{kind}.{}.{}", self.domain, self.path.join("."))
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{DOMAIN_SEPARATOR}{}", self.domain, self.path_string())
    }
}

/// A name as given by the caller, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSpec {
    /// A string, optionally prefixed with `domain:`, with `/` separated segments.
    Name(String),
    /// Path segments. Segments are joined with `/` before resolution.
    Segments(Vec<String>),
    /// An already resolved location, used as is.
    Location(ResourceLocation),
}

impl NameSpec {
    /// Resolve the name against a default domain.
    ///
    /// # Errors
    /// - If the resulting domain or path is empty or malformed
    pub fn resolve(self, default_domain: &str) -> Result<ResourceLocation> {
        let joined = match self {
            Self::Location(location) => return Ok(location),
            Self::Name(name) => name,
            Self::Segments(segments) => segments.join("/"),
        };

        let (domain, path) = match joined.split_once(DOMAIN_SEPARATOR) {
            Some((domain, path)) => (domain, path),
            None => (default_domain, joined.as_str()),
        };

        if domain.is_empty() {
            return Err(ResourceError::name(joined.as_str(), "empty domain"));
        }
        if domain.contains(PATH_SEPARATOR) {
            return Err(ResourceError::name(joined.as_str(), "domain contains a path separator"));
        }
        if path.is_empty() {
            return Err(ResourceError::name(joined.as_str(), "empty path"));
        }

        let segments = path
            .split(PATH_SEPARATOR)
            .map(|segment| {
                if segment.is_empty() {
                    Err(ResourceError::name(joined.as_str(), "empty path segment"))
                } else if segment.contains(DOMAIN_SEPARATOR) {
                    Err(ResourceError::name(joined.as_str(), "more than one domain separator"))
                } else {
                    Ok(segment.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResourceLocation {
            domain: domain.to_string(),
            path: segments,
        })
    }
}

/// Resolve a name into a location, using `default_domain` when the name has no domain.
///
/// # Errors
/// - If the resulting domain or path is empty or malformed
pub fn resolve(name: impl Into<NameSpec>, default_domain: &str) -> Result<ResourceLocation> {
    name.into().resolve(default_domain)
}

impl From<&str> for NameSpec {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}
impl From<String> for NameSpec {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}
impl From<&String> for NameSpec {
    fn from(value: &String) -> Self {
        Self::Name(value.clone())
    }
}
impl From<Vec<String>> for NameSpec {
    fn from(value: Vec<String>) -> Self {
        Self::Segments(value)
    }
}
impl From<Vec<&str>> for NameSpec {
    fn from(value: Vec<&str>) -> Self {
        Self::Segments(value.into_iter().map(str::to_string).collect())
    }
}
impl From<&[&str]> for NameSpec {
    fn from(value: &[&str]) -> Self {
        Self::Segments(value.iter().map(|s| (*s).to_string()).collect())
    }
}
impl<const N: usize> From<[&str; N]> for NameSpec {
    fn from(value: [&str; N]) -> Self {
        Self::Segments(value.iter().map(|s| (*s).to_string()).collect())
    }
}
impl From<ResourceLocation> for NameSpec {
    fn from(value: ResourceLocation) -> Self {
        Self::Location(value)
    }
}
impl From<&ResourceLocation> for NameSpec {
    fn from(value: &ResourceLocation) -> Self {
        Self::Location(value.clone())
    }
}
