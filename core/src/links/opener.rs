//! Platform URL openers

use crate::error::LinkError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tracing::debug;
use url::Url;

/// Seam to the host platform's "open this URL" mechanism
#[async_trait]
pub trait LinkOpener: Send + Sync {
    /// Ask the platform to open `url` outside the application
    async fn open(&self, url: &Url) -> Result<(), LinkError>;

    /// Name used in log lines
    fn name(&self) -> &str {
        "link-opener"
    }
}

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);

#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Opens URLs with the platform opener program
#[derive(Debug, Clone)]
pub struct SystemLinkOpener {
    program: PathBuf,
    args: Vec<String>,
}

impl SystemLinkOpener {
    /// Locate the platform opener on `PATH`
    pub fn detect() -> Result<Self, LinkError> {
        let (program, args) = OPENER;
        let program = which::which(program).map_err(|_| LinkError::OpenerUnavailable {
            program: program.to_string(),
        })?;

        debug!(program = %program.display(), "using system link opener");
        Ok(Self::with_program(
            program,
            args.iter().map(|arg| arg.to_string()).collect(),
        ))
    }

    /// Use an explicit program; the URL is appended after `args`
    pub fn with_program(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The opener program
    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

#[async_trait]
impl LinkOpener for SystemLinkOpener {
    async fn open(&self, url: &Url) -> Result<(), LinkError> {
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| LinkError::LaunchFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LinkError::OpenerFailed {
                url: url.to_string(),
                status: status.to_string(),
            })
        }
    }

    fn name(&self) -> &str {
        "system"
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_program() {
        let opener = SystemLinkOpener::with_program("true", Vec::new());
        let url = Url::parse("https://wiki.gov.gd").unwrap();
        assert!(opener.open(&url).await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_program_reports_status() {
        let opener = SystemLinkOpener::with_program("false", Vec::new());
        let url = Url::parse("https://wiki.gov.gd").unwrap();
        let err = opener.open(&url).await.unwrap_err();
        assert!(matches!(err, LinkError::OpenerFailed { .. }));
    }

    #[tokio::test]
    async fn test_missing_program_reports_launch_failure() {
        let opener = SystemLinkOpener::with_program("/nonexistent/ea-portal-opener", Vec::new());
        let url = Url::parse("https://wiki.gov.gd").unwrap();
        let err = opener.open(&url).await.unwrap_err();
        assert!(matches!(err, LinkError::LaunchFailed { .. }));
    }
}
