//! Host platforms and per-platform file filtering.
//!
//! Filtering is coarse on purpose: being able to look up symbols from other
//! platforms is more useful than strict isolation, so only whole integration
//! subsystems that can never matter on a host are dropped.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::generator::GenerateError;

/// Marker for vendored third-party sources, excluded on Linux and Mac.
pub const THIRD_PARTY_MARKER: &str = "Source/ThirdParty/";

/// Path segments excluded on Mac in addition to [`THIRD_PARTY_MARKER`].
pub const MAC_EXCLUDED_SEGMENTS: &[&str] = &[
    "/Windows/",
    "/Linux/",
    "/VisualStudioSourceCodeAccess/",
    "/WmfMedia/",
    "/WindowsDeviceProfileSelector/",
    "/WindowsMoviePlayer/",
    "/WinRT/",
];

/// A host platform the generator knows how to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    Linux,
    Mac,
    Win64,
}

impl HostPlatform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Result<Self, GenerateError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a host platform.
    pub fn from_os(os: &str) -> Result<Self, GenerateError> {
        match os {
            "linux" => Ok(HostPlatform::Linux),
            "macos" => Ok(HostPlatform::Mac),
            "windows" => Ok(HostPlatform::Win64),
            other => Err(GenerateError::unsupported_platform(other)),
        }
    }

    /// The architecture name used in rule names and build arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostPlatform::Linux => "Linux",
            HostPlatform::Mac => "Mac",
            HostPlatform::Win64 => "Win64",
        }
    }

    /// Segment markers whose presence excludes a file on this platform.
    pub fn excluded_markers(&self) -> Vec<&'static str> {
        match self {
            HostPlatform::Linux => vec![THIRD_PARTY_MARKER],
            HostPlatform::Mac => std::iter::once(THIRD_PARTY_MARKER)
                .chain(MAC_EXCLUDED_SEGMENTS.iter().copied())
                .collect(),
            HostPlatform::Win64 => Vec::new(),
        }
    }

    /// Decide whether a root-relative path belongs in the descriptor.
    pub fn includes(&self, relative_path: &str) -> bool {
        !self
            .excluded_markers()
            .iter()
            .any(|marker| relative_path.contains(marker))
    }

    /// The `BUILD` command used when no external project is configured.
    pub fn build_command(&self) -> String {
        match self {
            HostPlatform::Linux | HostPlatform::Mac => format!(
                "cd ${{UE4_ROOT_PATH}} && bash ${{UE4_ROOT_PATH}}/Engine/Build/BatchFiles/{}/Build.sh",
                self.as_str()
            ),
            HostPlatform::Win64 => {
                "bash ${UE4_ROOT_PATH}/Engine/Build/BatchFiles/Build.bat".to_string()
            }
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostPlatform {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(HostPlatform::Linux),
            "mac" | "macos" => Ok(HostPlatform::Mac),
            "win64" | "windows" | "win" => Ok(HostPlatform::Win64),
            _ => Err(GenerateError::unsupported_platform(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform() {
        assert_eq!("linux".parse::<HostPlatform>().unwrap(), HostPlatform::Linux);
        assert_eq!("Mac".parse::<HostPlatform>().unwrap(), HostPlatform::Mac);
        assert_eq!("macos".parse::<HostPlatform>().unwrap(), HostPlatform::Mac);
        assert_eq!("Win64".parse::<HostPlatform>().unwrap(), HostPlatform::Win64);
        assert!(matches!(
            "freebsd".parse::<HostPlatform>(),
            Err(GenerateError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn test_from_os_rejects_unknown_hosts() {
        assert_eq!(HostPlatform::from_os("linux").unwrap(), HostPlatform::Linux);
        assert!(HostPlatform::from_os("openbsd").is_err());
    }

    #[test]
    fn test_linux_filters_only_third_party() {
        let linux = HostPlatform::Linux;
        assert!(linux.includes("Source/Runtime/Core/Private/Core.cpp"));
        assert!(linux.includes("Source/Runtime/Windows/D3D12RHI/Private/Foo.cpp"));
        assert!(!linux.includes("Source/ThirdParty/zlib/zlib.h"));
    }

    #[test]
    fn test_mac_denylist() {
        let mac = HostPlatform::Mac;
        assert!(mac.includes("Source/Runtime/Core/Private/Core.cpp"));
        assert!(!mac.includes("Source/ThirdParty/zlib/zlib.h"));
        for segment in MAC_EXCLUDED_SEGMENTS {
            let path = format!("Source/Runtime{}Private/File.cpp", segment);
            assert!(!mac.includes(&path), "{} should be excluded", path);
        }
    }

    #[test]
    fn test_mac_markers_cover_denylist() {
        let markers = HostPlatform::Mac.excluded_markers();
        assert!(markers.contains(&THIRD_PARTY_MARKER));
        for segment in MAC_EXCLUDED_SEGMENTS {
            assert!(markers.contains(segment));
        }
    }

    #[test]
    fn test_windows_includes_everything() {
        let win = HostPlatform::Win64;
        assert!(win.includes("Source/ThirdParty/zlib/zlib.h"));
        assert!(win.includes("Source/Runtime/WinRT/Private/Foo.cpp"));
    }

    #[test]
    fn test_build_command() {
        assert_eq!(
            HostPlatform::Linux.build_command(),
            "cd ${UE4_ROOT_PATH} && bash ${UE4_ROOT_PATH}/Engine/Build/BatchFiles/Linux/Build.sh"
        );
        assert_eq!(
            HostPlatform::Win64.build_command(),
            "bash ${UE4_ROOT_PATH}/Engine/Build/BatchFiles/Build.bat"
        );
    }
}
