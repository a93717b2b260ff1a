//! Names HFSS and the filesystem see for each combination

mod filename;
mod path;
mod port;
mod variation;

pub use filename::compose_filename;
pub use path::{join_path, normalize_separators};
pub use port::touchstone_extension;
pub use variation::variation_string;
