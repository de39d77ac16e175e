//! Boot-time hand-off to the MAC layer
//!
//! [`activate`] is the single consumer of an [`ActivationConfig`]: ABP
//! credentials become an installed [`SessionState`], an OTAA identity is
//! passed on for the join exchange.

use crate::config::keys::{AppSKey, DevAddr, NwkSKey};
use crate::config::{ActivationConfig, Credentials, DeviceIdentity, SessionCredentials};
use crate::crypto::{self, MIC_SIZE};
use crate::error::ConfigError;
use crate::frame::{self, UPLINK_HEADER_SIZE};

/// Session state of an ABP-activated device
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    /// Device address
    pub dev_addr: DevAddr,
    /// Network session key
    pub nwk_skey: NwkSKey,
    /// Application session key
    pub app_skey: AppSKey,
    /// Uplink frame counter
    pub fcnt_up: u32,
}

impl SessionState {
    /// Install the provisioned ABP session
    pub fn new_abp(credentials: &SessionCredentials) -> Self {
        Self {
            dev_addr: credentials.dev_addr(),
            nwk_skey: *credentials.nwk_skey(),
            app_skey: *credentials.app_skey(),
            fcnt_up: 0,
        }
    }

    /// Increment the uplink frame counter
    pub fn increment_fcnt_up(&mut self) {
        self.fcnt_up = self.fcnt_up.wrapping_add(1);
    }

    /// Addressing header for the next uplink
    pub fn uplink_header(&self) -> [u8; UPLINK_HEADER_SIZE] {
        frame::uplink_header(self.dev_addr, self.fcnt_up)
    }

    /// MIC of the next uplink
    ///
    /// `frame` runs from the MHDR through the encrypted FRMPayload.
    pub fn uplink_mic(&self, frame: &[u8]) -> [u8; MIC_SIZE] {
        crypto::compute_mic(&self.nwk_skey, frame, self.dev_addr, self.fcnt_up)
    }
}

/// Result of consuming the activation configuration at boot
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activation {
    /// ABP: the session is ready for uplinks
    Session(SessionState),
    /// OTAA: the MAC layer joins with this identity
    Join(DeviceIdentity),
}

/// Consume the configuration for the mode it was built for
pub fn activate(config: &ActivationConfig) -> Result<Activation, ConfigError> {
    match config.get_credentials(config.select_mode())? {
        Credentials::Abp(credentials) => {
            #[cfg(feature = "defmt")]
            defmt::info!("ABP session installed for {}", credentials.dev_addr());
            Ok(Activation::Session(SessionState::new_abp(credentials)))
        }
        Credentials::Otaa(identity) => {
            #[cfg(feature = "defmt")]
            defmt::info!("OTAA identity ready for join, {}", identity.dev_eui());
            Ok(Activation::Join(*identity))
        }
    }
}
