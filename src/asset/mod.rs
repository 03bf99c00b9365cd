//! Artifact filename mapping
//!
//! Maps a release tag plus the local platform to the artifact filename that
//! release carries for the platform. The mapping is total: platforms with no
//! published artifact get a descriptive placeholder suffix rather than an
//! error, which yields a well-formed but non-downloadable URL.

use crate::platform::{Arch, Os, Platform};

const FILE_PREFIX: &str = "boxwallet-";

/// Expected artifact filename for `tag` on `platform`.
///
/// Every `v` in the tag is removed, not just a leading prefix; this matches
/// the naming of the published artifacts (`v0.0.5` -> `boxwallet-0.0.5-...`).
pub fn filename_for_tag(tag: &str, platform: &Platform) -> String {
    let version = tag.replace('v', "");
    format!("{}{}-{}", FILE_PREFIX, version, suffix_for(platform))
}

fn suffix_for(platform: &Platform) -> &'static str {
    match (platform.os, platform.arch) {
        (Os::Linux, Arch::X64) => "linux-x64.tar.gz",
        (Os::Linux, Arch::Arm64) => "Linux 64-bit (ARM)",
        (Os::Linux, Arch::Other) => "Linux (Other Arch)",
        (Os::Windows, Arch::X64) => "Windows 64-bit",
        (Os::Windows, _) => "Windows (Other/32-bit)",
        (Os::MacOs, Arch::X64) => "macOS (Intel)",
        (Os::MacOs, Arch::Arm64) => "macOS (Apple Silicon/M-series)",
        (Os::MacOs, Arch::Other) => "macOS (Other Arch)",
        (Os::Other, _) => "Unsupported Operating System",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(os: Os, arch: Arch) -> Platform {
        Platform { os, arch }
    }

    #[test]
    fn test_version_strips_leading_v() {
        let filename = filename_for_tag("v0.0.5", &platform(Os::Linux, Arch::X64));
        assert_eq!(filename, "boxwallet-0.0.5-linux-x64.tar.gz");
    }

    #[test]
    fn test_version_strips_every_v_occurrence() {
        let filename = filename_for_tag("vversion", &platform(Os::Linux, Arch::X64));
        assert_eq!(filename, "boxwallet-ersion-linux-x64.tar.gz");
    }

    #[test]
    fn test_digit_dot_structure_preserved() {
        let filename = filename_for_tag("v12.34.56", &platform(Os::Linux, Arch::X64));
        assert!(filename.starts_with("boxwallet-12.34.56-"));
        assert!(!filename.contains('v'));
    }

    #[test]
    fn test_suffix_table_linux() {
        assert_eq!(suffix_for(&platform(Os::Linux, Arch::X64)), "linux-x64.tar.gz");
        assert_eq!(suffix_for(&platform(Os::Linux, Arch::Arm64)), "Linux 64-bit (ARM)");
        assert_eq!(suffix_for(&platform(Os::Linux, Arch::Other)), "Linux (Other Arch)");
    }

    #[test]
    fn test_suffix_table_windows() {
        assert_eq!(suffix_for(&platform(Os::Windows, Arch::X64)), "Windows 64-bit");
        assert_eq!(
            suffix_for(&platform(Os::Windows, Arch::Arm64)),
            "Windows (Other/32-bit)"
        );
        assert_eq!(
            suffix_for(&platform(Os::Windows, Arch::Other)),
            "Windows (Other/32-bit)"
        );
    }

    #[test]
    fn test_suffix_table_macos() {
        assert_eq!(suffix_for(&platform(Os::MacOs, Arch::X64)), "macOS (Intel)");
        assert_eq!(
            suffix_for(&platform(Os::MacOs, Arch::Arm64)),
            "macOS (Apple Silicon/M-series)"
        );
        assert_eq!(suffix_for(&platform(Os::MacOs, Arch::Other)), "macOS (Other Arch)");
    }

    #[test]
    fn test_suffix_table_unsupported_os() {
        assert_eq!(
            suffix_for(&platform(Os::Other, Arch::X64)),
            "Unsupported Operating System"
        );
        assert_eq!(
            suffix_for(&platform(Os::Other, Arch::Other)),
            "Unsupported Operating System"
        );
    }

    #[test]
    fn test_macos_arm64_filename() {
        let filename = filename_for_tag("v1.2.0", &platform(Os::MacOs, Arch::Arm64));
        assert_eq!(filename, "boxwallet-1.2.0-macOS (Apple Silicon/M-series)");
    }
}
