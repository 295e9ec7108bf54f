pub mod engine;
pub mod helpers;
pub mod template_trait;
pub mod templates;

pub use template_trait::{DocumentTemplate, TemplateRegistry, PDF_CONTENT_TYPE};
