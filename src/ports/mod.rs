/// Ports module defining the interfaces between the resolution engine and
/// the outside world.
///
/// Only outbound (driven) ports exist: the engine is driven directly through
/// `ResolveDependenciesUseCase` and the container API.
pub mod outbound;
