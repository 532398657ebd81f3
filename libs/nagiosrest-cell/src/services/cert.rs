use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};
use tracing::debug;

use shared_models::PluginError;

pub const CERT_DIR_PREFIX: &str = "nagiosrestcert_";
pub const CERT_FILE_NAME: &str = "cert";

/// Rejects anything that is obviously not PEM before touching the filesystem.
pub fn validate_pem(certificate: &str) -> Result<(), PluginError> {
    if !certificate.contains("CERTIFICATE") {
        return Err(PluginError::InvalidCertificate(certificate.to_string()));
    }
    Ok(())
}

/// A certificate written to its own temporary directory.
///
/// Dropping removes the directory; `remove` does the same but reports failures.
pub struct StagedCertificate {
    dir: TempDir,
    path: PathBuf,
}

impl StagedCertificate {
    pub fn stage(certificate: &str, root: Option<&Path>) -> Result<Self, PluginError> {
        validate_pem(certificate)?;

        let mut builder = Builder::new();
        builder.prefix(CERT_DIR_PREFIX);
        let dir = match root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };

        let path = dir.path().join(CERT_FILE_NAME);
        fs::write(&path, certificate)?;
        debug!("Staged backend certificate at {}", path.display());

        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn remove(self) -> Result<(), PluginError> {
        let dir = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!("Removed certificate directory {}", dir.display());
        Ok(())
    }
}

/// Runs `f` with the path of a freshly staged certificate and removes it afterwards.
///
/// A failure to remove the directory replaces whatever `f` returned.
pub async fn with_staged_certificate<F, Fut, T>(
    certificate: &str,
    root: Option<&Path>,
    f: F,
) -> Result<T, PluginError>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, PluginError>>,
{
    let staged = StagedCertificate::stage(certificate, root)?;
    let result = f(staged.path().to_path_buf()).await;
    staged.remove()?;
    result
}
