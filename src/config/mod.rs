//! Activation configuration
//!
//! This module contains the types a LoRaWAN device needs to activate:
//! - Build-time activation mode selection (ABP or OTAA)
//! - Provisioned keys and identifiers with their wire byte order
//! - Validation into an immutable [`ActivationConfig`]
//! - DevEUI derivation from a hardware address

mod activation;

/// Provisioned credential values
pub mod credentials;

/// Hardware-address based DevEUI derivation
pub mod dev_eui;

/// Key and identifier newtypes
pub mod keys;

pub use activation::{
    select_mode, AbpProvisioning, ActivationConfig, ActivationMode, Credentials,
    DeviceIdentity, OtaaProvisioning, Provisioning, SessionCredentials, ACTIVE_MODE,
};
pub use dev_eui::{DevEuiDerivation, Eui48Expansion, HardwareMac};
pub use keys::{AppEui, AppKey, AppSKey, DevAddr, DevEui, LittleEndianBytes8, NwkSKey, OpaqueKey16};
