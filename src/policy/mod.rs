//! Version bump policy.
//!
//! Maps the aggregated change classification to a semver increment and
//! computes the recommended next version. Version parse failures never abort
//! a diff; they degrade to the literal `"unknown"`.

use semver::Version;
use serde::{Deserialize, Serialize};

/// Semver increment implied by a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    None,
}

impl VersionBump {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Patch => "PATCH",
            Self::None => "NONE",
        }
    }
}

impl std::fmt::Display for VersionBump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute the recommended next version from a base version and a bump.
///
/// Returns `"unknown"` when the base version is not valid semver, whatever
/// the bump. A prerelease suffix is dropped on any bump but preserved when
/// the version is unchanged.
#[must_use]
pub fn recommend_version(base_version: &str, bump: VersionBump) -> String {
    let Ok(base) = Version::parse(base_version) else {
        return "unknown".to_string();
    };

    match bump {
        VersionBump::Major => format!("{}.0.0", base.major + 1),
        VersionBump::Minor => format!("{}.{}.0", base.major, base.minor + 1),
        VersionBump::Patch => format!("{}.{}.{}", base.major, base.minor, base.patch + 1),
        VersionBump::None => base_version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_resets_minor_and_patch() {
        assert_eq!(recommend_version("1.2.3", VersionBump::Major), "2.0.0");
    }

    #[test]
    fn test_minor_resets_patch() {
        assert_eq!(recommend_version("1.2.3", VersionBump::Minor), "1.3.0");
    }

    #[test]
    fn test_patch_increment() {
        assert_eq!(recommend_version("1.2.0", VersionBump::Patch), "1.2.1");
    }

    #[test]
    fn test_none_keeps_base_verbatim() {
        assert_eq!(recommend_version("1.2.3", VersionBump::None), "1.2.3");
        // Prerelease preserved when nothing changed
        assert_eq!(
            recommend_version("1.2.3-rc.1", VersionBump::None),
            "1.2.3-rc.1"
        );
    }

    #[test]
    fn test_bump_drops_prerelease() {
        assert_eq!(recommend_version("1.2.3-rc.1", VersionBump::Minor), "1.3.0");
        assert_eq!(recommend_version("2.0.0-beta", VersionBump::Patch), "2.0.1");
    }

    #[test]
    fn test_malformed_version_is_unknown() {
        assert_eq!(recommend_version("v1", VersionBump::Major), "unknown");
        assert_eq!(recommend_version("1.2", VersionBump::Patch), "unknown");
        assert_eq!(recommend_version("unknown", VersionBump::None), "unknown");
        assert_eq!(recommend_version("", VersionBump::Minor), "unknown");
    }

    #[test]
    fn test_serialized_form_is_uppercase() {
        let s = serde_json::to_string(&VersionBump::Major).unwrap();
        assert_eq!(s, r#""MAJOR""#);
    }
}
