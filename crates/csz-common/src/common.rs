//! Language configuration shared across crates.
//!
//! These live in the common crate so that the syntax-tree input contract and the
//! declaration builder agree on one definition without depending on each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language version a source file is compiled against.
///
/// Variants are ordered: a feature is available when the configured version
/// compares `>=` to the feature's required version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageVersion {
    CSharp1,
    CSharp2,
    CSharp3,
    CSharp4,
    CSharp5,
    CSharp6,
    CSharp7,
    CSharp7_1,
    CSharp7_2,
    CSharp7_3,
    CSharp8,
    CSharp9,
    CSharp10,
    CSharp11,
    CSharp12,
    #[default]
    CSharp13,
    Preview,
}

impl LanguageVersion {
    /// Newest released version.
    pub const LATEST: LanguageVersion = LanguageVersion::CSharp13;

    /// Display form used by diagnostics and the CLI (`7.2`, `10`, `preview`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageVersion::CSharp1 => "1",
            LanguageVersion::CSharp2 => "2",
            LanguageVersion::CSharp3 => "3",
            LanguageVersion::CSharp4 => "4",
            LanguageVersion::CSharp5 => "5",
            LanguageVersion::CSharp6 => "6",
            LanguageVersion::CSharp7 => "7",
            LanguageVersion::CSharp7_1 => "7.1",
            LanguageVersion::CSharp7_2 => "7.2",
            LanguageVersion::CSharp7_3 => "7.3",
            LanguageVersion::CSharp8 => "8",
            LanguageVersion::CSharp9 => "9",
            LanguageVersion::CSharp10 => "10",
            LanguageVersion::CSharp11 => "11",
            LanguageVersion::CSharp12 => "12",
            LanguageVersion::CSharp13 => "13",
            LanguageVersion::Preview => "preview",
        }
    }

    #[inline]
    #[must_use]
    pub fn supports(self, feature: LanguageFeature) -> bool {
        self >= feature.required_version()
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a language version string is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLanguageVersion(pub String);

impl fmt::Display for UnknownLanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language version '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguageVersion {}

impl FromStr for LanguageVersion {
    type Err = UnknownLanguageVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "1.0" => LanguageVersion::CSharp1,
            "2" | "2.0" => LanguageVersion::CSharp2,
            "3" | "3.0" => LanguageVersion::CSharp3,
            "4" | "4.0" => LanguageVersion::CSharp4,
            "5" | "5.0" => LanguageVersion::CSharp5,
            "6" | "6.0" => LanguageVersion::CSharp6,
            "7" | "7.0" => LanguageVersion::CSharp7,
            "7.1" => LanguageVersion::CSharp7_1,
            "7.2" => LanguageVersion::CSharp7_2,
            "7.3" => LanguageVersion::CSharp7_3,
            "8" | "8.0" => LanguageVersion::CSharp8,
            "9" | "9.0" => LanguageVersion::CSharp9,
            "10" | "10.0" => LanguageVersion::CSharp10,
            "11" | "11.0" => LanguageVersion::CSharp11,
            "12" | "12.0" => LanguageVersion::CSharp12,
            "13" | "13.0" | "latest" | "default" => LanguageVersion::CSharp13,
            "preview" | "latestmajor" => LanguageVersion::Preview,
            _ => return Err(UnknownLanguageVersion(s.to_string())),
        };
        Ok(version)
    }
}

/// How a source file is compiled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceCodeKind {
    /// Ordinary source file; top-level statements are allowed in one file.
    #[default]
    Regular,
    /// Interactive/script file; top-level members live in a script class.
    Script,
}

/// Language features gated on a minimum `LanguageVersion` during declaration building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageFeature {
    StaticClasses,
    PartialTypes,
    ReadOnlyStructs,
    RefStructs,
    FileTypes,
}

impl LanguageFeature {
    #[must_use]
    pub const fn required_version(self) -> LanguageVersion {
        match self {
            LanguageFeature::StaticClasses | LanguageFeature::PartialTypes => {
                LanguageVersion::CSharp2
            }
            LanguageFeature::ReadOnlyStructs | LanguageFeature::RefStructs => {
                LanguageVersion::CSharp7_2
            }
            LanguageFeature::FileTypes => LanguageVersion::CSharp11,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            LanguageFeature::StaticClasses => "static classes",
            LanguageFeature::PartialTypes => "partial types",
            LanguageFeature::ReadOnlyStructs => "readonly structs",
            LanguageFeature::RefStructs => "ref structs",
            LanguageFeature::FileTypes => "file types",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_version_ordering() {
        assert!(LanguageVersion::CSharp7_2 > LanguageVersion::CSharp7_1);
        assert!(LanguageVersion::Preview > LanguageVersion::LATEST);
        assert!(LanguageVersion::CSharp2.supports(LanguageFeature::StaticClasses));
        assert!(!LanguageVersion::CSharp1.supports(LanguageFeature::StaticClasses));
        assert!(!LanguageVersion::CSharp7_1.supports(LanguageFeature::RefStructs));
    }

    #[test]
    fn test_language_version_from_str() {
        assert_eq!("7.2".parse(), Ok(LanguageVersion::CSharp7_2));
        assert_eq!("latest".parse(), Ok(LanguageVersion::LATEST));
        assert_eq!("Preview".parse(), Ok(LanguageVersion::Preview));
        assert!("42".parse::<LanguageVersion>().is_err());
    }
}
