use crate::shared::error::DependencyManagementError;
use crate::shared::Result;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Maximum length for a single coordinate part (security limit)
const MAX_PART_LENGTH: usize = 255;

/// Separator between coordinate parts in the textual form
const SEPARATOR: char = ':';

/// Checks one coordinate part. Parts can never contain the separator,
/// so `group:name` always splits back into the pair it was built from.
/// Parts also name directories of a BOM repository, so they can never
/// contain a path separator or be `.` or `..`.
fn validate_part(part: &str, label: &str, whole: &str) -> Result<()> {
    let reason = if part.is_empty() {
        Some(format!("{} cannot be empty", label))
    } else if part.len() > MAX_PART_LENGTH {
        Some(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            label,
            part.len(),
            MAX_PART_LENGTH
        ))
    } else if part.contains(SEPARATOR) {
        Some(format!("{} contains the separator '{}'", label, SEPARATOR))
    } else if part.chars().any(char::is_whitespace) {
        Some(format!("{} contains whitespace", label))
    } else if part.contains(['/', '\\']) {
        Some(format!("{} contains a path separator", label))
    } else if part == "." || part == ".." {
        Some(format!("{} cannot be a relative path segment", label))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DependencyManagementError::InvalidCoordinate {
            value: whole.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}

fn split_parts<'a>(value: &'a str, expected: usize, shape: &str) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = value.split(SEPARATOR).collect();
    if parts.len() != expected {
        return Err(DependencyManagementError::InvalidCoordinate {
            value: value.to_string(),
            reason: format!("expected {}", shape),
        }
        .into());
    }
    Ok(parts)
}

/// Identity of a module: the (group, name) pair every version and
/// exclusion map is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    group: String,
    name: String,
}

impl DependencyKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        let whole = format!("{}{}{}", group, SEPARATOR, name);
        validate_part(&group, "Group", &whole)?;
        validate_part(&name, "Name", &whole)?;
        Ok(Self { group, name })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, SEPARATOR, self.name)
    }
}

impl FromStr for DependencyKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = split_parts(s, 2, "group:name")?;
        Self::new(parts[0], parts[1])
    }
}

impl Serialize for DependencyKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Coordinates of a BOM: group, artifact and a fixed version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BomCoordinates {
    key: DependencyKey,
    version: String,
}

impl BomCoordinates {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let key = DependencyKey::new(group, artifact)?;
        let version = version.into();
        validate_part(&version, "Version", &format!("{}:{}", key, version))?;
        Ok(Self { key, version })
    }

    pub fn key(&self) -> &DependencyKey {
        &self.key
    }

    pub fn group(&self) -> &str {
        self.key.group()
    }

    pub fn artifact(&self) -> &str {
        self.key.name()
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for BomCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, SEPARATOR, self.version)
    }
}

impl FromStr for BomCoordinates {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = split_parts(s, 3, "group:artifact:version")?;
        Self::new(parts[0], parts[1], parts[2])
    }
}

impl Serialize for BomCoordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
