//! Addressing header of an uplink data frame
//!
//! The MAC layer owns frame encoding. This module only lays out the part of
//! an unconfirmed uplink that carries the provisioned DevAddr, so the
//! address reaches the radio in the byte order the network expects.

use crate::config::keys::DevAddr;

/// MHDR, DevAddr, FCtrl and FCnt
pub const UPLINK_HEADER_SIZE: usize = 8;

/// MHDR of an unconfirmed data uplink, LoRaWAN R1
const MHDR_UNCONFIRMED_DATA_UP: u8 = 0x40;

/// Header of an unconfirmed uplink without FOpts
///
/// FCtrl is zero. Only the low 16 bits of `fcnt` go on the wire.
pub fn uplink_header(dev_addr: DevAddr, fcnt: u32) -> [u8; UPLINK_HEADER_SIZE] {
    let mut header = [0u8; UPLINK_HEADER_SIZE];
    header[0] = MHDR_UNCONFIRMED_DATA_UP;
    header[1..5].copy_from_slice(&dev_addr.to_wire());
    // header[5] is FCtrl, zero
    header[6..8].copy_from_slice(&(fcnt as u16).to_le_bytes());
    header
}
