//! `linux/cdrom.h` request codes and argument layouts
//!
//! Only the audio-control subset is mirrored. Layouts must match the
//! kernel's structs byte for byte; the size tests below pin them.

use spindle_core::{AudioStatus, Msf, Subchannel, TrackType};

pub const CDROMPAUSE: u32 = 0x5301;
pub const CDROMRESUME: u32 = 0x5302;
pub const CDROMPLAYTRKIND: u32 = 0x5304;
pub const CDROMREADTOCHDR: u32 = 0x5305;
pub const CDROMREADTOCENTRY: u32 = 0x5306;
pub const CDROMSTOP: u32 = 0x5307;
pub const CDROMEJECT: u32 = 0x5309;
pub const CDROMVOLCTRL: u32 = 0x530a;
pub const CDROMSUBCHNL: u32 = 0x530b;
pub const CDROMVOLREAD: u32 = 0x5313;
pub const CDROMCLOSETRAY: u32 = 0x5319;

/// Address format selectors
pub const CDROM_LBA: u8 = 0x01;
pub const CDROM_MSF: u8 = 0x02;

/// Control nibble bit marking a data track
pub const CDROM_DATA_TRACK: u8 = 0x04;

const CDROM_AUDIO_PLAY: u8 = 0x11;
const CDROM_AUDIO_PAUSED: u8 = 0x12;
const CDROM_AUDIO_COMPLETED: u8 = 0x13;
const CDROM_AUDIO_ERROR: u8 = 0x14;
const CDROM_AUDIO_NO_STATUS: u8 = 0x15;

/// `union cdrom_addr`: either an MSF triple or a 32-bit LBA
///
/// Kept as raw bytes so reading the MSF view needs no union access.
#[repr(C, align(4))]
#[derive(Debug, Default, Clone, Copy)]
pub struct CdromAddr {
    pub bytes: [u8; 4],
}

impl CdromAddr {
    pub fn msf(&self) -> Msf {
        Msf::new(self.bytes[0], self.bytes[1], self.bytes[2])
    }
}

/// `struct cdrom_tochdr`
#[repr(C)]
#[derive(Debug, Default)]
pub struct CdromTocHdr {
    pub cdth_trk0: u8,
    pub cdth_trk1: u8,
}

/// `struct cdrom_ti`
#[repr(C)]
#[derive(Debug, Default)]
pub struct CdromTi {
    pub cdti_trk0: u8,
    pub cdti_ind0: u8,
    pub cdti_trk1: u8,
    pub cdti_ind1: u8,
}

impl CdromTi {
    /// Span `start..=end`, with both index fields left at 0
    pub fn span(start: u8, end: u8) -> Self {
        Self {
            cdti_trk0: start,
            cdti_trk1: end,
            ..Default::default()
        }
    }
}

/// `struct cdrom_tocentry`
///
/// `cdte_adr_ctrl` packs the `cdte_adr:4` / `cdte_ctrl:4` bitfields.
#[repr(C)]
#[derive(Debug, Default)]
pub struct CdromTocEntry {
    pub cdte_track: u8,
    pub cdte_adr_ctrl: u8,
    pub cdte_format: u8,
    pub cdte_addr: CdromAddr,
    pub cdte_datamode: u8,
}

impl CdromTocEntry {
    pub fn track_type(&self) -> TrackType {
        if control_nibble(self.cdte_adr_ctrl) & CDROM_DATA_TRACK != 0 {
            TrackType::Data
        } else {
            TrackType::Audio
        }
    }
}

/// `struct cdrom_subchnl`
#[repr(C)]
#[derive(Debug, Default)]
pub struct CdromSubchnl {
    pub cdsc_format: u8,
    pub cdsc_audiostatus: u8,
    pub cdsc_adr_ctrl: u8,
    pub cdsc_trk: u8,
    pub cdsc_ind: u8,
    pub cdsc_absaddr: CdromAddr,
    pub cdsc_reladdr: CdromAddr,
}

impl CdromSubchnl {
    pub fn to_subchannel(&self) -> Subchannel {
        Subchannel {
            audio_status: audio_status(self.cdsc_audiostatus),
            track: self.cdsc_trk,
            index: self.cdsc_ind,
            absolute: self.cdsc_absaddr.msf(),
            relative: self.cdsc_reladdr.msf(),
        }
    }
}

/// `struct cdrom_volctrl`
#[repr(C)]
#[derive(Debug, Default)]
pub struct CdromVolCtrl {
    pub channel0: u8,
    pub channel1: u8,
    pub channel2: u8,
    pub channel3: u8,
}

/// Extract the 4-bit control field from an adr/ctrl byte.
///
/// GCC allocates the first bitfield (`adr`) in the low nibble on
/// little-endian targets and in the high nibble on big-endian ones.
pub fn control_nibble(adr_ctrl: u8) -> u8 {
    if cfg!(target_endian = "little") {
        adr_ctrl >> 4
    } else {
        adr_ctrl & 0x0f
    }
}

pub fn audio_status(raw: u8) -> AudioStatus {
    match raw {
        CDROM_AUDIO_PLAY => AudioStatus::Playing,
        CDROM_AUDIO_PAUSED => AudioStatus::Paused,
        CDROM_AUDIO_COMPLETED => AudioStatus::Completed,
        CDROM_AUDIO_ERROR => AudioStatus::Error,
        CDROM_AUDIO_NO_STATUS => AudioStatus::NoStatus,
        _ => AudioStatus::Invalid,
    }
}
