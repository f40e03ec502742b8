/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports:
/// the local BOM repository, report formatters and console output.
pub mod outbound;
