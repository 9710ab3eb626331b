mod bookmarks;
mod note;

pub use bookmarks::*;
pub use note::*;
