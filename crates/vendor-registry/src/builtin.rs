//! Compiled-in USB vendor IDs.
//!
//! These vendors are recognized unconditionally, without any override file.
//! [`BUILT_IN_VENDOR_IDS`] fixes both membership and order; the registry
//! builder copies it verbatim into the registry prefix.

use crate::registry::VendorId;

/// Known mobile/debug device vendor IDs, one constant per manufacturer.
pub mod vendor_ids {
    use crate::registry::VendorId;

    /// Google.
    pub const GOOGLE: VendorId = VendorId::new(0x18d1);
    /// HTC.
    pub const HTC: VendorId = VendorId::new(0x0bb4);
    /// Samsung.
    pub const SAMSUNG: VendorId = VendorId::new(0x04e8);
    /// Motorola.
    pub const MOTOROLA: VendorId = VendorId::new(0x22b8);
    /// LG Electronics.
    pub const LGE: VendorId = VendorId::new(0x1004);
    /// Huawei.
    pub const HUAWEI: VendorId = VendorId::new(0x12d1);
    /// Acer.
    pub const ACER: VendorId = VendorId::new(0x0502);
    /// Sony Ericsson.
    pub const SONY_ERICSSON: VendorId = VendorId::new(0x0fce);
    /// Foxconn.
    pub const FOXCONN: VendorId = VendorId::new(0x0489);
    /// Dell.
    pub const DELL: VendorId = VendorId::new(0x413c);
    /// Nvidia.
    pub const NVIDIA: VendorId = VendorId::new(0x0955);
    /// Garmin-Asus.
    pub const GARMIN_ASUS: VendorId = VendorId::new(0x091e);
    /// Sharp.
    pub const SHARP: VendorId = VendorId::new(0x04dd);
    /// ZTE.
    pub const ZTE: VendorId = VendorId::new(0x19d2);
    /// Kyocera.
    pub const KYOCERA: VendorId = VendorId::new(0x0482);
    /// Pantech.
    pub const PANTECH: VendorId = VendorId::new(0x10a9);
    /// Qualcomm.
    pub const QUALCOMM: VendorId = VendorId::new(0x05c6);
    /// On-The-Go-Video.
    pub const OTGV: VendorId = VendorId::new(0x2257);
    /// NEC.
    pub const NEC: VendorId = VendorId::new(0x0409);
    /// Panasonic Mobile Communications.
    pub const PMC: VendorId = VendorId::new(0x04da);
    /// Toshiba.
    pub const TOSHIBA: VendorId = VendorId::new(0x0930);
    /// SK Telesys.
    pub const SK_TELESYS: VendorId = VendorId::new(0x1f53);
    /// KT Tech.
    pub const KT_TECH: VendorId = VendorId::new(0x2116);
    /// Asus.
    pub const ASUS: VendorId = VendorId::new(0x0b05);
    /// Philips.
    pub const PHILIPS: VendorId = VendorId::new(0x0471);
    /// Texas Instruments.
    pub const TI: VendorId = VendorId::new(0x0451);
}

/// The built-in vendor list, in registry order.
pub const BUILT_IN_VENDOR_IDS: &[VendorId] = &[
    vendor_ids::GOOGLE,
    vendor_ids::HTC,
    vendor_ids::SAMSUNG,
    vendor_ids::MOTOROLA,
    vendor_ids::LGE,
    vendor_ids::HUAWEI,
    vendor_ids::ACER,
    vendor_ids::SONY_ERICSSON,
    vendor_ids::FOXCONN,
    vendor_ids::DELL,
    vendor_ids::NVIDIA,
    vendor_ids::GARMIN_ASUS,
    vendor_ids::SHARP,
    vendor_ids::ZTE,
    vendor_ids::KYOCERA,
    vendor_ids::PANTECH,
    vendor_ids::QUALCOMM,
    vendor_ids::OTGV,
    vendor_ids::NEC,
    vendor_ids::PMC,
    vendor_ids::TOSHIBA,
    vendor_ids::SK_TELESYS,
    vendor_ids::KT_TECH,
    vendor_ids::ASUS,
    vendor_ids::PHILIPS,
    vendor_ids::TI,
];

/// Max number of registry entries, built-in plus third party.
/// Must be at least `BUILT_IN_VENDOR_IDS.len()`; the builder checks this on
/// every run.
pub const VENDOR_COUNT_MAX: usize = 128;
