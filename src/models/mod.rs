pub mod decoration;
pub mod document;
pub mod params;

pub use decoration::*;
pub use document::*;
pub use params::*;
