//! Linux CD-ROM backend using the `linux/cdrom.h` ioctls
//!
//! The device is opened read-only and non-blocking, which lets the
//! control ioctls work even when no disc is loaded (or the tray is open).

use crate::ffi::{
    CdromSubchnl, CdromTi, CdromTocEntry, CdromTocHdr, CdromVolCtrl, CDROMCLOSETRAY, CDROMEJECT,
    CDROMPAUSE, CDROMPLAYTRKIND, CDROMREADTOCENTRY, CDROMREADTOCHDR, CDROMRESUME, CDROMSTOP,
    CDROMSUBCHNL, CDROMVOLCTRL, CDROMVOLREAD, CDROM_LBA, CDROM_MSF,
};
use spindle_core::{
    CdDrive, CdError, DriveOpener, Result, Subchannel, TocHeader, TrackNumber, TrackType, Volume,
};
use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

/// An open CD-ROM block device
///
/// The file descriptor is closed when the drive is dropped.
#[derive(Debug)]
pub struct LinuxDrive {
    file: File,
    path: PathBuf,
}

impl LinuxDrive {
    /// Open `path` read-only and non-blocking
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|e| CdError::init(path, e))?;

        tracing::info!("Opened CD-ROM device {}", path.display());

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Device path this drive was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Issue a request that carries an argument struct
    #[allow(unsafe_code)]
    fn ioctl_with<T>(&self, op: &'static str, request: u32, arg: &mut T) -> Result<()> {
        tracing::debug!(op, "ioctl");
        // SAFETY: the descriptor stays open for the lifetime of `self`, and
        // every caller pairs `request` with the `#[repr(C)]` struct the kernel
        // expects for it, so the kernel reads/writes only within `*arg`.
        let rc = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                request as _,
                (arg as *mut T).cast::<libc::c_void>(),
            )
        };
        Self::check(op, rc)
    }

    /// Issue a request that takes no argument
    #[allow(unsafe_code)]
    fn ioctl_bare(&self, op: &'static str, request: u32) -> Result<()> {
        tracing::debug!(op, "ioctl");
        // SAFETY: the request takes no argument; the descriptor is open.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), request as _, 0) };
        Self::check(op, rc)
    }

    fn check(op: &'static str, rc: libc::c_int) -> Result<()> {
        if rc < 0 {
            let err = io::Error::last_os_error();
            tracing::debug!(op, error = %err, "ioctl failed");
            Err(CdError::device(op, err))
        } else {
            Ok(())
        }
    }
}

impl CdDrive for LinuxDrive {
    fn read_toc_header(&self) -> Result<TocHeader> {
        let mut hdr = CdromTocHdr::default();
        self.ioctl_with("CDROMREADTOCHDR", CDROMREADTOCHDR, &mut hdr)?;
        Ok(TocHeader {
            first_track: hdr.cdth_trk0,
            last_track: hdr.cdth_trk1,
        })
    }

    fn read_toc_entry(&self, track: TrackNumber) -> Result<TrackType> {
        let mut entry = CdromTocEntry {
            cdte_track: track,
            cdte_format: CDROM_LBA,
            ..Default::default()
        };
        self.ioctl_with("CDROMREADTOCENTRY", CDROMREADTOCENTRY, &mut entry)?;
        Ok(entry.track_type())
    }

    fn play_tracks(&self, start: TrackNumber, end: TrackNumber) -> Result<()> {
        let mut ti = CdromTi::span(start, end);
        self.ioctl_with("CDROMPLAYTRKIND", CDROMPLAYTRKIND, &mut ti)
    }

    fn pause(&self) -> Result<()> {
        self.ioctl_bare("CDROMPAUSE", CDROMPAUSE)
    }

    fn resume(&self) -> Result<()> {
        self.ioctl_bare("CDROMRESUME", CDROMRESUME)
    }

    fn stop(&self) -> Result<()> {
        self.ioctl_bare("CDROMSTOP", CDROMSTOP)
    }

    fn read_subchannel(&self) -> Result<Subchannel> {
        let mut sub = CdromSubchnl {
            cdsc_format: CDROM_MSF,
            ..Default::default()
        };
        self.ioctl_with("CDROMSUBCHNL", CDROMSUBCHNL, &mut sub)?;
        Ok(sub.to_subchannel())
    }

    fn read_volume(&self) -> Result<Volume> {
        let mut vol = CdromVolCtrl::default();
        self.ioctl_with("CDROMVOLREAD", CDROMVOLREAD, &mut vol)?;
        Ok(Volume::new(vol.channel0, vol.channel1))
    }

    fn write_volume(&self, volume: Volume) -> Result<()> {
        let mut vol = CdromVolCtrl {
            channel0: volume.left,
            channel1: volume.right,
            channel2: 0,
            channel3: 0,
        };
        self.ioctl_with("CDROMVOLCTRL", CDROMVOLCTRL, &mut vol)
    }

    fn eject(&self) -> Result<()> {
        self.ioctl_bare("CDROMEJECT", CDROMEJECT)
    }

    fn close_tray(&self) -> Result<()> {
        self.ioctl_bare("CDROMCLOSETRAY", CDROMCLOSETRAY)
    }
}

impl Drop for LinuxDrive {
    fn drop(&mut self) {
        tracing::info!("Closing CD-ROM device {}", self.path.display());
    }
}

/// Opens [`LinuxDrive`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxOpener;

impl DriveOpener for LinuxOpener {
    fn open(&self, device: &Path) -> Result<Box<dyn CdDrive>> {
        Ok(Box::new(LinuxDrive::open(device)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_device_is_init_error() {
        let err = LinuxDrive::open(Path::new("/dev/spindle-does-not-exist")).unwrap_err();
        match err {
            CdError::Init { device, .. } => {
                assert_eq!(device, "/dev/spindle-does-not-exist");
            }
            other => panic!("expected init error, got {other:?}"),
        }
    }

    #[test]
    fn control_calls_on_regular_file_fail_as_device_errors() {
        // A plain file opens fine but rejects every CD-ROM ioctl (ENOTTY)
        let file = tempfile::NamedTempFile::new().unwrap();
        let drive = LinuxDrive::open(file.path()).unwrap();
        assert_eq!(drive.path(), file.path());

        let err = drive.read_toc_header().unwrap_err();
        assert!(err.is_device_error(), "unexpected error: {err:?}");
        assert!(drive.read_subchannel().is_err());
        assert!(drive.play_tracks(1, 1).is_err());
        assert!(drive.stop().is_err());
    }

    #[test]
    fn opener_boxes_drive() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let drive = LinuxOpener.open(file.path()).unwrap();
        assert!(drive.read_volume().is_err());
    }
}
