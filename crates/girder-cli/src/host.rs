//! Host platform resolution

use girder_plan::PlatformKind;

/// Platform kind of the build host
///
/// Cross targets (ios, android, tizen) are never hosts; they must be selected
/// explicitly with `--platform`.
pub fn host_platform() -> PlatformKind {
    if cfg!(target_os = "macos") {
        PlatformKind::MacOsApp
    } else {
        PlatformKind::GenericDesktop
    }
}
