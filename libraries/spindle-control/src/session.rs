//! Device session - owns the open drive
//!
//! At most one drive handle is open per session. Re-initializing closes the
//! current handle before opening a new one, and dropping the session closes
//! whatever is still open, so every exit path releases the device.

use crate::config::DeviceConfig;
use spindle_core::{CdDrive, CdError, DriveOpener, Result};
use std::path::{Path, PathBuf};

/// Lifecycle of the drive handle
pub struct DeviceSession {
    /// Opens the drive on `init`
    opener: Box<dyn DriveOpener>,

    /// Where the device path comes from
    config: DeviceConfig,

    /// Path resolved by the last successful `init`
    device: Option<PathBuf>,

    /// The open handle, if any
    drive: Option<Box<dyn CdDrive>>,
}

impl DeviceSession {
    /// Create a closed session; call [`init`](Self::init) before use
    pub fn new(opener: impl DriveOpener + 'static, config: DeviceConfig) -> Self {
        Self {
            opener: Box::new(opener),
            config,
            device: None,
            drive: None,
        }
    }

    /// Create a session and open the drive
    pub fn open(opener: impl DriveOpener + 'static, config: DeviceConfig) -> Result<Self> {
        let mut session = Self::new(opener, config);
        session.init()?;
        Ok(session)
    }

    /// Open the configured device
    ///
    /// Closes the current handle first if the session is already open. On
    /// failure the session is left closed.
    ///
    /// The path comes from the [`DeviceConfig`] the session was built with.
    /// The environment is read once, when that config is loaded, so a
    /// re-init reopens the same device even if `CDAUDIO` has changed since.
    pub fn init(&mut self) -> Result<()> {
        let device = self.config.device_path();

        if self.drive.is_some() {
            tracing::debug!("Re-initializing session, closing current handle");
            self.shutdown();
        }

        let drive = self.opener.open(&device)?;
        tracing::info!("Session opened on {}", device.display());

        self.drive = Some(drive);
        self.device = Some(device);
        Ok(())
    }

    /// Close the drive if open; no-op otherwise
    pub fn shutdown(&mut self) {
        if let Some(drive) = self.drive.take() {
            drop(drive);
            if let Some(device) = self.device.take() {
                tracing::info!("Session closed on {}", device.display());
            }
        }
    }

    /// Check if a drive is open
    pub fn is_open(&self) -> bool {
        self.drive.is_some()
    }

    /// Device path of the open drive
    pub fn device(&self) -> Option<&Path> {
        self.device.as_deref()
    }

    /// The open drive
    ///
    /// # Errors
    /// `CdError::NotInitialized` if the session is closed
    pub fn drive(&self) -> Result<&dyn CdDrive> {
        self.drive.as_deref().ok_or(CdError::NotInitialized)
    }

    /// Open the tray
    pub fn eject(&self) -> Result<()> {
        self.drive()?.eject()
    }

    /// Close the tray
    pub fn close_tray(&self) -> Result<()> {
        self.drive()?.close_tray()
    }
}

impl Drop for DeviceSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for DeviceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSession")
            .field("config", &self.config)
            .field("device", &self.device)
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}
