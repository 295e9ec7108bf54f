use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::{DocumentError, DocumentResult};
use crate::models::Document;
use crate::pdf::builder::TypstBuilder;
use crate::templates::TemplateRegistry;

/// Renders document models to PDF bytes by compiling emitted Typst source
/// with the `typst` binary. Each call works on its own temp files; nothing
/// is shared between requests.
pub struct PdfGenerator {
    registry: Arc<TemplateRegistry>,
    temp_dir: PathBuf,
    typst_bin: String,
}

impl PdfGenerator {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        PdfGenerator {
            registry,
            temp_dir: std::env::temp_dir(),
            typst_bin: "typst".to_string(),
        }
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn with_typst_binary(mut self, typst_bin: impl Into<String>) -> Self {
        self.typst_bin = typst_bin.into();
        self
    }

    /// Full pipeline: form-field JSON in, PDF bytes out.
    pub fn generate(&self, template_id: &str, data: serde_json::Value) -> Result<Vec<u8>> {
        let template = self
            .registry
            .get(template_id)
            .with_context(|| format!("unknown template: {template_id}"))?;
        let document = template.generate(&data)?;
        let bytes = self.render_document(&document)?;
        Ok(bytes)
    }

    /// Renders an already-built document model to PDF bytes.
    pub fn render_document(&self, document: &Document) -> DocumentResult<Vec<u8>> {
        let source = TypstBuilder::emit(document);
        self.compile(&source)
    }

    /// Compiles Typst source to PDF bytes via the external binary.
    pub fn compile(&self, source: &str) -> DocumentResult<Vec<u8>> {
        let id = Uuid::new_v4();
        let typ_path = self.temp_dir.join(format!("docsmith_{id}.typ"));
        let pdf_path = self.temp_dir.join(format!("docsmith_{id}.pdf"));

        fs::write(&typ_path, source)?;
        debug!(path = %typ_path.display(), "wrote typst source");

        let output = match Command::new(&self.typst_bin)
            .arg("compile")
            .arg(&typ_path)
            .arg(&pdf_path)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                let _ = fs::remove_file(&typ_path);
                return Err(DocumentError::Render(format!(
                    "failed to run {}: {e}",
                    self.typst_bin
                )));
            }
        };

        if !output.status.success() {
            let _ = fs::remove_file(&typ_path);
            return Err(DocumentError::Render(format!(
                "typst compilation failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let bytes = fs::read(&pdf_path)?;
        let _ = fs::remove_file(&typ_path);
        let _ = fs::remove_file(&pdf_path);

        info!(size = bytes.len(), "compiled pdf");
        Ok(bytes)
    }

    pub fn list_templates(&self) -> Vec<(String, String)> {
        self.registry.list()
    }

    pub fn template_exists(&self, template_id: &str) -> bool {
        self.registry.exists(template_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_surfaces_as_render_error() {
        let generator = PdfGenerator::new(Arc::new(TemplateRegistry::new()))
            .with_typst_binary("typst-binary-that-does-not-exist");
        let err = generator.compile("= Title").unwrap_err();
        assert!(matches!(err, DocumentError::Render(_)));
    }

    #[test]
    fn unknown_template_id_is_rejected() {
        let generator = PdfGenerator::new(Arc::new(TemplateRegistry::new()));
        let err = generator
            .generate("statement", serde_json::json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("unknown template"));
    }
}
