use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the agreement cost table. Amounts stay display text; no
/// arithmetic is ever performed on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    pub sr_no: String,
    pub service: String,
    pub cost: String,
}

impl CostRow {
    pub fn new(sr_no: &str, service: &str, cost: &str) -> Self {
        CostRow {
            sr_no: sr_no.to_string(),
            service: service.to_string(),
            cost: cost.to_string(),
        }
    }
}

/// Input fields for the service agreement template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementParams {
    pub date: NaiveDate,
    pub ref_no: String,
    pub client_name: String,
    pub package_type: String,
    pub company_type: String,
    pub business_activity: String,
    pub docs_list: Vec<String>,
    pub costs: Vec<CostRow>,
    pub duration: String,
    pub scope: Vec<String>,
    pub terms: Vec<String>,
}

/// Input fields for the certificate of completion template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateParams {
    pub name: String,
    pub course: String,
    pub date: NaiveDate,
    pub cert_id: String,
    pub issued_by: String,
}

/// Input fields for the invoice template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceParams {
    pub client: String,
    pub client_address: String,
    pub service: String,
    /// Display text as entered by the user, currency included in the
    /// column header rather than the value.
    pub amount: String,
    pub invoice_no: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InvoiceParams {
    /// Notes are optional at the form level; an empty or whitespace-only
    /// string counts as absent.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}
