use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Document;

/// Content type of every rendered file.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Base trait for all document templates. A template deserializes raw
/// form-field JSON into its typed parameter struct and assembles the
/// document model from it; rendering happens elsewhere.
pub trait DocumentTemplate: Send + Sync {
    /// Builds the document model from form-field JSON.
    fn generate(&self, data: &Value) -> Result<Document>;

    /// Unique id of the template.
    fn template_id(&self) -> &str;

    /// Download name offered for the rendered file.
    fn filename(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str {
        "Document template"
    }
}

/// Central registry of the available templates.
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn DocumentTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let mut templates: HashMap<String, Arc<dyn DocumentTemplate>> = HashMap::new();

        use crate::templates::templates::*;

        let agreement = Arc::new(AgreementTemplate::new());
        templates.insert(agreement.template_id().to_string(), agreement);

        let certificate = Arc::new(CertificateTemplate::new());
        templates.insert(certificate.template_id().to_string(), certificate);

        let invoice = Arc::new(InvoiceTemplate::new());
        templates.insert(invoice.template_id().to_string(), invoice);

        Self { templates }
    }

    pub fn get(&self, template_id: &str) -> Option<Arc<dyn DocumentTemplate>> {
        self.templates.get(template_id).cloned()
    }

    pub fn list(&self) -> Vec<(String, String)> {
        self.templates
            .iter()
            .map(|(id, template)| (id.clone(), template.description().to_string()))
            .collect()
    }

    pub fn exists(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
