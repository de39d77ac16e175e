//! Fixed-size key and identifier types
//!
//! Each provisioned field has its own type so that an AppEUI cannot be passed
//! where a DevEUI is expected, and an ABP session key cannot stand in for the
//! OTAA root key. The byte order of a field is fixed by its type:
//!
//! - EUIs are stored least-significant byte first, which is their wire order.
//!   Network consoles print them most-significant byte first; use
//!   `from_msb` when copying them from there.
//! - Keys are opaque 16-byte blocks and are used exactly as provisioned.
//! - The device address is a 32-bit number and goes on the wire little-endian.

use core::fmt;

/// 8-byte identifier stored in little-endian (wire) order
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LittleEndianBytes8([u8; 8]);

impl LittleEndianBytes8 {
    /// Wrap bytes that are already least-significant byte first
    pub const fn from_lsb(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Wrap bytes given most-significant byte first, reversing them
    pub const fn from_msb(bytes: [u8; 8]) -> Self {
        Self(reverse8(bytes))
    }

    /// Bytes in wire order
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Bytes most-significant first, as printed by network consoles
    pub const fn to_msb(&self) -> [u8; 8] {
        reverse8(self.0)
    }

    /// Whether every byte is zero
    pub const fn is_zero(&self) -> bool {
        all_zero(&self.0)
    }
}

impl fmt::Debug for LittleEndianBytes8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_msb() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// 16-byte AES-128 key with no numeric interpretation
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OpaqueKey16([u8; 16]);

impl OpaqueKey16 {
    /// Wrap a key block as provisioned
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Key block as provisioned
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Whether every byte is zero
    pub const fn is_zero(&self) -> bool {
        all_zero(&self.0)
    }
}

// Key bytes never reach a log.
impl fmt::Debug for OpaqueKey16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OpaqueKey16(..)")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OpaqueKey16 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "OpaqueKey16(..)")
    }
}

macro_rules! eui_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name(LittleEndianBytes8);

        impl $name {
            /// Wrap bytes that are already least-significant byte first
            pub const fn from_lsb(bytes: [u8; 8]) -> Self {
                Self(LittleEndianBytes8::from_lsb(bytes))
            }

            /// Wrap bytes given most-significant byte first
            pub const fn from_msb(bytes: [u8; 8]) -> Self {
                Self(LittleEndianBytes8::from_msb(bytes))
            }

            /// Bytes in wire order
            pub const fn as_bytes(&self) -> &[u8; 8] {
                self.0.as_bytes()
            }

            /// Bytes most-significant first
            pub const fn to_msb(&self) -> [u8; 8] {
                self.0.to_msb()
            }

            /// Whether every byte is zero
            pub const fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }
    };
}

macro_rules! key_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $name(OpaqueKey16);

        impl $name {
            /// Wrap a key block as provisioned
            pub const fn new(bytes: [u8; 16]) -> Self {
                Self(OpaqueKey16::new(bytes))
            }

            /// Key block as provisioned
            pub const fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }

            /// Whether every byte is zero
            pub const fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(..)", stringify!($name))
            }
        }

        #[cfg(feature = "defmt")]
        impl defmt::Format for $name {
            fn format(&self, f: defmt::Formatter) {
                defmt::write!(f, "{=str}(..)", stringify!($name))
            }
        }
    };
}

eui_field!(
    /// Application identifier (JoinEUI), little-endian on the wire
    AppEui
);
eui_field!(
    /// Globally unique device identifier, little-endian on the wire
    DevEui
);
key_field!(
    /// OTAA root key shared with the join server
    AppKey
);
key_field!(
    /// Network session key, signs every frame
    NwkSKey
);
key_field!(
    /// Application session key, encrypts application payloads
    AppSKey
);

/// 32-bit short device address
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DevAddr(u32);

impl DevAddr {
    /// Wrap a device address as provisioned, e.g. `0x260B9B87`
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Numeric value as provisioned
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Little-endian wire form
    pub const fn to_wire(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Whether the address is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for DevAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DevAddr({:#010X})", self.0)
    }
}

const fn reverse8(bytes: [u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = bytes[7 - i];
        i += 1;
    }
    out
}

const fn all_zero(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eui_msb_entry_is_reversed_for_the_wire() {
        let eui = DevEui::from_msb([0x70, 0xB3, 0xD5, 0x7E, 0xD0, 0x06, 0xCE, 0xF0]);
        assert_eq!(eui.as_bytes(), &[0xF0, 0xCE, 0x06, 0xD0, 0x7E, 0xD5, 0xB3, 0x70]);
        assert_eq!(eui.to_msb(), [0x70, 0xB3, 0xD5, 0x7E, 0xD0, 0x06, 0xCE, 0xF0]);
    }

    #[test]
    fn dev_addr_wire_form_is_little_endian() {
        let addr = DevAddr::new(0x260B_9B87);
        assert_eq!(addr.to_wire(), [0x87, 0x9B, 0x0B, 0x26]);
    }

    #[test]
    fn zero_detection() {
        assert!(AppKey::new([0; 16]).is_zero());
        assert!(!AppKey::new([0x01; 16]).is_zero());
        assert!(AppEui::from_lsb([0; 8]).is_zero());
        assert!(DevAddr::new(0).is_zero());
    }
}
