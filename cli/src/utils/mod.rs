pub mod io;
pub mod names;

pub use names::sibling_project_name;
