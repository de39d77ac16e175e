#![allow(dead_code)]

use core::cell::Cell;

use lorawan_activation::config::{DevEui, DevEuiDerivation, Eui48Expansion, HardwareMac};

/// Derivation that counts how often it is asked for a DevEUI
pub struct CountingDerivation {
    calls: Cell<usize>,
}

impl CountingDerivation {
    /// Create new counting derivation
    pub fn new() -> Self {
        Self { calls: Cell::new(0) }
    }

    /// Number of derivations performed
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DevEuiDerivation for CountingDerivation {
    fn derive(&self, mac: &HardwareMac) -> DevEui {
        self.calls.set(self.calls.get() + 1);
        Eui48Expansion.derive(mac)
    }
}

/// MAC address of an ESP32 module
pub const TEST_MAC: HardwareMac = HardwareMac::new([0x24, 0x0A, 0xC4, 0x12, 0x34, 0x56]);

/// ABP network session key used across the tests
pub const NWKSKEY: [u8; 16] = [
    0x3E, 0x66, 0x07, 0x3F, 0x96, 0x73, 0x6B, 0xAE, 0x89, 0x3D, 0x7D, 0x9E, 0x5E, 0x99, 0x9D, 0xAE,
];

/// ABP application session key used across the tests
pub const APPSKEY: [u8; 16] = [
    0x91, 0x4F, 0xA0, 0xF2, 0x7F, 0x3F, 0xBF, 0x75, 0xC6, 0x19, 0x4E, 0xEE, 0x9A, 0x12, 0x82, 0x87,
];

/// ABP device address used across the tests
pub const DEVADDR: u32 = 0x260B_9B87;

/// All-zero AppEUI, as issued by TTN
pub const APPEUI: [u8; 8] = [0; 8];

/// Explicit DevEUI, LSB first
pub const DEVEUI: Option<[u8; 8]> = Some([0xF0, 0xCE, 0x06, 0xD0, 0x7E, 0xD5, 0xB3, 0x70]);

/// OTAA root key
pub const APPKEY: [u8; 16] = [
    0x3C, 0x8C, 0x79, 0x1A, 0x0D, 0x2A, 0xE7, 0xEC, 0x75, 0x1F, 0xBB, 0xE8, 0x2B, 0xD8, 0x39, 0xDD,
];
