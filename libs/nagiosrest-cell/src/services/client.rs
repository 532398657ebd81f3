use std::fs;
use std::path::{Path, PathBuf};

use reqwest::{Certificate, Client, Response};
use tracing::{debug, error, instrument, warn};

use shared_config::AppConfig;
use shared_models::PluginError;

use crate::models::{BackendRequest, Credentials};
use crate::services::cert::with_staged_certificate;

/// Issues calls against the nagiosrest API and classifies the outcome.
///
/// A fresh `reqwest::Client` is built per call so that the staged certificate
/// is the only trust anchor and nothing outlives the invocation.
#[derive(Debug, Clone, Default)]
pub struct NagiosRestClient {
    cert_temp_root: Option<PathBuf>,
}

impl NagiosRestClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            cert_temp_root: config.cert_temp_root.clone(),
        }
    }

    pub fn with_cert_temp_root(root: impl Into<PathBuf>) -> Self {
        Self {
            cert_temp_root: Some(root.into()),
        }
    }

    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub async fn call(
        &self,
        request: &BackendRequest,
        credentials: &Credentials,
        certificate: &str,
    ) -> Result<Response, PluginError> {
        let response = with_staged_certificate(
            certificate,
            self.cert_temp_root.as_deref(),
            |cert_path| async move {
                let client = build_client(&cert_path)?;

                let mut builder = client
                    .request(request.method.clone(), &request.url)
                    .basic_auth(&credentials.username, Some(&credentials.password));

                if let Some(body) = &request.body {
                    debug!("Request body: {}", body);
                    builder = builder.json(body);
                }

                builder.send().await.map_err(|err| PluginError::Transport {
                    url: request.url.clone(),
                    message: err.to_string(),
                })
            },
        )
        .await?;

        classify(&request.url, response).await
    }
}

fn build_client(cert_path: &Path) -> Result<Client, PluginError> {
    let pem = fs::read(cert_path)?;
    let certificate =
        Certificate::from_pem(&pem).map_err(|e| PluginError::CertificateLoad(e.to_string()))?;

    Client::builder()
        .tls_built_in_root_certs(false)
        .add_root_certificate(certificate)
        .build()
        .map_err(|e| PluginError::CertificateLoad(e.to_string()))
}

/// Passes through anything below 400, otherwise reads the body into the error.
pub async fn classify(url: &str, response: Response) -> Result<Response, PluginError> {
    let status = response.status().as_u16();
    if status < 400 {
        debug!("Call to {} succeeded with {}", url, status);
        return Ok(response);
    }

    // A body that fails to arrive is logged and left empty; the status still decides the tier.
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not read {} response body from {}: {}", status, url, e);
            String::new()
        }
    };
    Err(classify_failure(url, status, body))
}

pub fn classify_failure(url: &str, status: u16, body: String) -> PluginError {
    if status >= 500 {
        warn!("Monitoring backend unavailable ({}) for {}: {}", status, url, body);
        PluginError::Unavailable {
            url: url.to_string(),
            status,
            body,
        }
    } else {
        error!("Monitoring backend rejected call ({}) to {}: {}", status, url, body);
        PluginError::Rejected {
            url: url.to_string(),
            status,
            body,
        }
    }
}
