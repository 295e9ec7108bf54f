//! Typed document templates rendered to PDF.
//!
//! Three fixed-layout documents are supported: a service agreement, a
//! certificate of completion, and an invoice. Each template is a pure
//! mapping from a typed parameter struct to a renderer-independent
//! document model (headings, paragraphs, lists, tables, spacers, plus an
//! optional per-page decoration). The model is emitted as Typst source
//! and compiled to PDF bytes with the external `typst` binary.
//!
//! ```no_run
//! use std::sync::Arc;
//! use docsmith::{PdfGenerator, TemplateRegistry};
//!
//! # fn main() -> anyhow::Result<()> {
//! let generator = PdfGenerator::new(Arc::new(TemplateRegistry::new()));
//! let pdf = generator.generate(
//!     "certificate",
//!     serde_json::json!({
//!         "name": "Jane Doe",
//!         "course": "Rust 101",
//!         "date": "2025-01-01",
//!         "cert_id": "CERT-2025-001",
//!         "issued_by": "ABC Institute of Technology",
//!     }),
//! )?;
//! std::fs::write("certificate.pdf", pdf)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod models;
pub mod pdf;
pub mod templates;

// Re-export commonly used types
pub use self::core::{DocumentError, DocumentResult, Margin, Orientation, PageLayout, PageSize};
pub use models::{
    AgreementParams, Align, CertificateParams, Color, ContentBlock, CostRow, Document, DrawOp,
    InvoiceParams, ListMarker, PageCanvas, PageDecorator, TableBlock, TextStyle,
};
pub use pdf::{PdfGenerator, TypstBuilder};
pub use templates::{DocumentTemplate, TemplateRegistry, PDF_CONTENT_TYPE};
