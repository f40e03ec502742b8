/// Crate-wide Result with `anyhow::Error`; typed failures are
/// `DependencyManagementError` values converted on the way out.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
