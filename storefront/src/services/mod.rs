pub mod invoice;
pub mod metrics;

pub use invoice::{CreatedInvoice, InvoiceClient, InvoiceError, InvoiceOrder};
pub use metrics::{get_metrics, init_metrics};
