pub mod builder;
pub mod generator;

pub use builder::TypstBuilder;
pub use generator::PdfGenerator;
