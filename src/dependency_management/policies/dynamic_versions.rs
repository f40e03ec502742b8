/// Classifies requested versions that the build tool resolves itself and
/// that dependency management must therefore leave alone.
pub struct Versions;

impl Versions {
    /// Status markers resolved to the newest matching release at build time
    const LATEST_PREFIX: &'static str = "latest.";

    /// Returns true for versions such as `1.+`, `latest.release`,
    /// `[1.0,2.0)` or `1.*`
    pub fn is_dynamic(version: &str) -> bool {
        let version = version.trim();
        version.ends_with('+')
            || version.starts_with(Self::LATEST_PREFIX)
            || version.contains('*')
            || Self::is_range(version)
    }

    fn is_range(version: &str) -> bool {
        version.starts_with(['[', ']', '('])
            || version.ends_with([']', '[', ')'])
            || version.contains(',')
    }
}
