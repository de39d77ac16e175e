//! Credentials baked into the firmware
//!
//! Only the set for the mode selected by the cargo features is compiled.

#[cfg(feature = "abp")]
use super::activation::AbpProvisioning;
#[cfg(feature = "otaa")]
use super::activation::OtaaProvisioning;
#[cfg(any(
    all(feature = "abp", not(feature = "otaa")),
    all(feature = "otaa", not(feature = "abp"))
))]
use super::activation::Provisioning;

/// ABP network session key
#[cfg(feature = "abp")]
pub const NWKSKEY: [u8; 16] = [
    0x3E, 0x66, 0x07, 0x3F, 0x96, 0x73, 0x6B, 0xAE, 0x89, 0x3D, 0x7D, 0x9E, 0x5E, 0x99, 0x9D, 0xAE,
];

/// ABP application session key
#[cfg(feature = "abp")]
pub const APPSKEY: [u8; 16] = [
    0x91, 0x4F, 0xA0, 0xF2, 0x7F, 0x3F, 0xBF, 0x75, 0xC6, 0x19, 0x4E, 0xEE, 0x9A, 0x12, 0x82, 0x87,
];

/// ABP device address, unique for every node on the network
#[cfg(feature = "abp")]
pub const DEVADDR: u32 = 0x260B_9B87;

/// ABP provisioning
#[cfg(feature = "abp")]
pub const ABP: AbpProvisioning = AbpProvisioning::new(NWKSKEY, APPSKEY, DEVADDR);

/// OTAA application EUI, LSB first. TTN-issued AppEUIs may be all zero.
#[cfg(feature = "otaa")]
pub const APPEUI: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// OTAA device EUI, LSB first
///
/// `None` (or all zero) derives it from the hardware MAC address at boot.
#[cfg(feature = "otaa")]
pub const DEVEUI: Option<[u8; 8]> = Some([0xF0, 0xCE, 0x06, 0xD0, 0x7E, 0xD5, 0xB3, 0x70]);

/// OTAA root key, copied as-is from the network console (Semtech default key)
#[cfg(feature = "otaa")]
pub const APPKEY: [u8; 16] = [
    0x3C, 0x8C, 0x79, 0x1A, 0x0D, 0x2A, 0xE7, 0xEC, 0x75, 0x1F, 0xBB, 0xE8, 0x2B, 0xD8, 0x39, 0xDD,
];

/// OTAA provisioning
#[cfg(feature = "otaa")]
pub const OTAA: OtaaProvisioning = OtaaProvisioning::new(APPEUI, DEVEUI, APPKEY);

/// Provisioning for the active mode
#[cfg(all(feature = "abp", not(feature = "otaa")))]
pub const PROVISIONING: Provisioning = Provisioning::Abp(ABP);

/// Provisioning for the active mode
#[cfg(all(feature = "otaa", not(feature = "abp")))]
pub const PROVISIONING: Provisioning = Provisioning::Otaa(OTAA);
