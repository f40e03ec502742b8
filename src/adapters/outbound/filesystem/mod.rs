/// Filesystem adapters for BOM descriptors and report output
mod file_writer;
mod local_bom_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use local_bom_repository::LocalBomRepository;
