// All available document templates.

pub mod agreement;
pub mod certificate;
pub mod invoice;

pub use agreement::AgreementTemplate;
pub use certificate::{CertificateFrame, CertificateTemplate};
pub use invoice::InvoiceTemplate;
