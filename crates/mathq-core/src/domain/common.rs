use std::fmt;
use std::path::Path;

use crate::domain::error::{DomainError, NameViolation};

/// Characters Windows refuses in file names, beyond the path separators.
const RESERVED_CHARS: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Device names Windows reserves regardless of extension.
const RESERVED_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const MAX_NAME_BYTES: usize = 255;

/// A folder name that is safe to use as a single directory component.
///
/// This type encodes an important invariant:
/// a configured name can never escape the images root or produce a
/// directory some platform cannot create.
///
/// `FolderName` is a *semantic guardrail*, not a filesystem abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderName(String);

impl FolderName {
    /// Validate a raw name taken from the configuration.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        match check(&raw) {
            Ok(()) => Ok(Self(raw)),
            Err(reason) => Err(DomainError::InvalidFolderName { name: raw, reason }),
        }
    }

    /// Build a name known to be valid at compile time.
    ///
    /// # Panics
    /// Panics if `raw` fails validation.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        assert!(check(raw).is_ok(), "invalid built-in folder name: {raw:?}");
        Self(raw.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow as a single relative path component.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

fn check(raw: &str) -> Result<(), NameViolation> {
    if raw.trim().is_empty() {
        return Err(NameViolation::Empty);
    }
    if raw == "." || raw == ".." {
        return Err(NameViolation::DotSegment);
    }
    if raw.len() > MAX_NAME_BYTES {
        return Err(NameViolation::TooLong);
    }
    for c in raw.chars() {
        if c == '/' || c == '\\' {
            return Err(NameViolation::PathSeparator);
        }
        if c.is_control() {
            return Err(NameViolation::ControlCharacter);
        }
        if RESERVED_CHARS.contains(&c) {
            return Err(NameViolation::ReservedCharacter(c));
        }
    }
    if raw.ends_with('.') || raw.ends_with(' ') {
        return Err(NameViolation::TrailingDotOrSpace);
    }

    // "con.txt" is as reserved as "CON".
    let stem = raw.split('.').next().unwrap_or(raw);
    if RESERVED_DEVICE_NAMES
        .iter()
        .any(|d| d.eq_ignore_ascii_case(stem))
    {
        return Err(NameViolation::ReservedDeviceName);
    }

    Ok(())
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for FolderName {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
