pub mod cert;
pub mod client;
pub mod operations;
pub mod requests;
pub mod settings;
pub mod urls;

pub use cert::{with_staged_certificate, StagedCertificate};
pub use client::NagiosRestClient;
pub use operations::NagiosRestService;
pub use settings::MonitoringSettings;
