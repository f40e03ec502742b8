use super::DependencyKey;
use crate::shared::error::DependencyManagementError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// A dependency as declared in a scope: `group:name` with an optional version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedDependency {
    key: DependencyKey,
    version: Option<String>,
}

impl RequestedDependency {
    pub fn new(key: DependencyKey, version: Option<String>) -> Self {
        Self { key, version }
    }

    pub fn key(&self) -> &DependencyKey {
        &self.key
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for RequestedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}", self.key, version),
            None => write!(f, "{}", self.key),
        }
    }
}

impl FromStr for RequestedDependency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.splitn(3, ':').collect::<Vec<_>>().as_slice() {
            [group, name] => Ok(Self::new(DependencyKey::new(*group, *name)?, None)),
            [group, name, version] if !version.trim().is_empty() => Ok(Self::new(
                DependencyKey::new(*group, *name)?,
                Some(version.to_string()),
            )),
            _ => Err(DependencyManagementError::InvalidCoordinate {
                value: s.to_string(),
                reason: "expected group:name or group:name:version".to_string(),
            }
            .into()),
        }
    }
}

/// The in-flight resolution of one requested dependency.
///
/// `use_version` replaces the version that will actually be resolved;
/// the originally requested dependency stays available for reporting.
#[derive(Debug, Clone)]
pub struct DependencyResolveDetails {
    requested: RequestedDependency,
    selected_version: Option<String>,
}

impl DependencyResolveDetails {
    pub fn new(requested: RequestedDependency) -> Self {
        Self {
            requested,
            selected_version: None,
        }
    }

    pub fn requested(&self) -> &RequestedDependency {
        &self.requested
    }

    pub fn use_version(&mut self, version: impl Into<String>) {
        self.selected_version = Some(version.into());
    }

    /// The version resolution will use: the selected one if any, else the requested one
    pub fn target_version(&self) -> Option<&str> {
        self.selected_version
            .as_deref()
            .or_else(|| self.requested.version())
    }

    pub fn is_overridden(&self) -> bool {
        self.selected_version.is_some()
    }
}
