mod directory;
mod error;
mod model;

pub use directory::{load_directory, parse_directory};
pub use error::{CatalogueError, Result};
pub use model::{Candidate, DirectoryEntry};
