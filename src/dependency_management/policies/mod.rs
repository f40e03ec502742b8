mod dynamic_versions;

pub use dynamic_versions::Versions;
