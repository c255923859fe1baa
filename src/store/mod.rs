pub mod activity_directory;

pub use activity_directory::{ActivityDirectory, DirectoryError};
