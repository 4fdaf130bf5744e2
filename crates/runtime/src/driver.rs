//! Driver process management
//!
//! Launches a WebDriver server binary (chromedriver) bound to a TCP port,
//! with stdout and stderr captured to a log file in a build-output
//! directory, and terminates it on teardown.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Log file name for captured driver output.
pub const LOG_FILE_NAME: &str = "chromedriver.log";

/// A launched WebDriver server process.
///
/// The process is a scoped resource: [`DriverProcess::stop`] signals
/// termination and reaps the child, and `Drop` does the same as a backstop
/// so the driver is released even when HTTP teardown fails first.
///
/// Launching does not wait for the server to accept connections; the first
/// HTTP request made against the port enforces readiness naturally.
#[derive(Debug)]
pub struct DriverProcess {
    child: Option<Child>,
    log_path: PathBuf,
}

impl DriverProcess {
    /// Spawn `<executable> --port=<port>` with output captured to
    /// `<log_dir>/chromedriver.log`.
    ///
    /// Creates `log_dir` if it does not exist and uses it as the working
    /// directory of the child. A process that exits immediately (bad
    /// executable, port already bound at bind-time) is reported as
    /// [`Error::LaunchFailed`]; a port conflict that the driver survives
    /// manifests later as a connection failure on the first request.
    pub fn launch(executable: &Path, port: u16, log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir)?;
        let log_path = log_dir.join(LOG_FILE_NAME);
        let log_out = File::create(&log_path)?;
        let log_err = log_out.try_clone()?;

        debug!(
            executable = %executable.display(),
            port,
            log = %log_path.display(),
            "launching driver"
        );

        let mut child = Command::new(executable)
            .arg(format!("--port={port}"))
            .current_dir(log_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log_out))
            .stderr(Stdio::from(log_err))
            .spawn()
            .map_err(|e| Error::LaunchFailed(format!("Failed to spawn process: {e}")))?;

        // Surface immediate exits; a healthy driver keeps running.
        std::thread::sleep(std::time::Duration::from_millis(100));
        let probe = match child.try_wait() {
            Ok(Some(status)) => Err(Error::LaunchFailed(format!(
                "Driver process exited immediately with status: {status}"
            ))),
            Ok(None) => Ok(()),
            Err(e) => Err(Error::LaunchFailed(format!(
                "Failed to check process status: {e}"
            ))),
        };
        if let Err(e) = probe {
            // A Child is not killed on drop; release it before bailing.
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }

        Ok(Self {
            child: Some(child),
            log_path,
        })
    }

    /// Path to the captured driver output.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Process id of the running driver, if it has not been stopped.
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Signal the driver to terminate and reap it.
    ///
    /// Best-effort and idempotent: a second call is a no-op, and a child
    /// that already exited is only reaped.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                // Already exited on its own; just reap below.
                debug!(error = %e, "driver kill failed");
            }
            match child.wait() {
                Ok(status) => debug!(%status, "driver stopped"),
                Err(e) => warn!(error = %e, "failed to reap driver process"),
            }
        }
    }
}

impl Drop for DriverProcess {
    fn drop(&mut self) {
        self.stop();
    }
}
