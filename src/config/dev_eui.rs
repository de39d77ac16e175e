//! DevEUI derivation from a hardware MAC address
//!
//! Devices that leave the DevEUI unset get one from their hardware address.
//! The derivation is a trait so a MAC stack with its own scheme can supply
//! it; [`Eui48Expansion`] is the default.

use core::fmt;

use super::keys::DevEui;

/// 6-byte hardware (EUI-48) address, most-significant byte first
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HardwareMac([u8; 6]);

impl HardwareMac {
    /// Wrap a MAC address in the order it is printed, e.g. `24:0A:C4:...`
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Address bytes, most-significant first
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Debug for HardwareMac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "HardwareMac({:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X})",
            a, b, c, d, e, g
        )
    }
}

/// Deterministic mapping from a hardware address to a DevEUI
///
/// Implementations must depend on nothing but the MAC: the same address has
/// to produce the same DevEUI on every boot.
pub trait DevEuiDerivation {
    /// Derive the DevEUI for `mac`
    fn derive(&self, mac: &HardwareMac) -> DevEui;
}

/// IEEE EUI-48 to EUI-64 expansion
///
/// The OUI (first three bytes) is kept, `FF FE` is inserted, and the
/// device-specific three bytes follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Eui48Expansion;

impl DevEuiDerivation for Eui48Expansion {
    fn derive(&self, mac: &HardwareMac) -> DevEui {
        let m = mac.as_bytes();
        DevEui::from_msb([m[0], m[1], m[2], 0xFF, 0xFE, m[3], m[4], m[5]])
    }
}

impl<D: DevEuiDerivation + ?Sized> DevEuiDerivation for &D {
    fn derive(&self, mac: &HardwareMac) -> DevEui {
        (**self).derive(mac)
    }
}
