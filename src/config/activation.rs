use crate::error::{ConfigError, Field};

use super::dev_eui::{DevEuiDerivation, Eui48Expansion, HardwareMac};
use super::keys::{AppEui, AppKey, AppSKey, DevAddr, DevEui, NwkSKey};

/// LoRaWAN activation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivationMode {
    /// Activation by personalization: session keys provisioned directly
    Abp,
    /// Over-the-air activation: session keys derived from a join exchange
    Otaa,
}

impl ActivationMode {
    /// Pick the mode from the two enable flags
    ///
    /// Exactly one flag must be set.
    pub const fn from_flags(abp: bool, otaa: bool) -> Result<Self, ConfigError> {
        match (abp, otaa) {
            (true, false) => Ok(ActivationMode::Abp),
            (false, true) => Ok(ActivationMode::Otaa),
            _ => Err(ConfigError::AmbiguousMode),
        }
    }
}

/// Mode selected by the `abp` / `otaa` cargo features
pub const ACTIVE_MODE: ActivationMode =
    match ActivationMode::from_flags(cfg!(feature = "abp"), cfg!(feature = "otaa")) {
        Ok(mode) => mode,
        Err(_) => panic!("exactly one of the `abp` and `otaa` features must be enabled"),
    };

// Unnamed constants are always evaluated, so a bad feature set fails the build.
const _: ActivationMode = ACTIVE_MODE;

/// Activation mode this firmware was built for
pub const fn select_mode() -> ActivationMode {
    ACTIVE_MODE
}

/// ABP fields as provisioned, before validation
///
/// A field that is all zero counts as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AbpProvisioning {
    /// Network session key
    pub nwk_skey: Option<NwkSKey>,
    /// Application session key
    pub app_skey: Option<AppSKey>,
    /// Device address
    pub dev_addr: Option<DevAddr>,
}

impl AbpProvisioning {
    /// Build from raw provisioned values, mapping zero values to absent
    pub const fn new(nwk_skey: [u8; 16], app_skey: [u8; 16], dev_addr: u32) -> Self {
        let nwk_skey = NwkSKey::new(nwk_skey);
        let app_skey = AppSKey::new(app_skey);
        let dev_addr = DevAddr::new(dev_addr);
        Self {
            nwk_skey: if nwk_skey.is_zero() {
                None
            } else {
                Some(nwk_skey)
            },
            app_skey: if app_skey.is_zero() {
                None
            } else {
                Some(app_skey)
            },
            dev_addr: if dev_addr.is_zero() {
                None
            } else {
                Some(dev_addr)
            },
        }
    }

    /// Check that every field is present
    pub fn validate(&self) -> Result<SessionCredentials, ConfigError> {
        let nwk_skey = present(self.nwk_skey, Field::NwkSKey, NwkSKey::is_zero)?;
        let app_skey = present(self.app_skey, Field::AppSKey, AppSKey::is_zero)?;
        let dev_addr = present(self.dev_addr, Field::DevAddr, DevAddr::is_zero)?;
        Ok(SessionCredentials {
            nwk_skey,
            app_skey,
            dev_addr,
        })
    }
}

/// OTAA fields as provisioned, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OtaaProvisioning {
    /// Application identifier; all zero is a valid value
    pub app_eui: AppEui,
    /// Device identifier; `None` means derive it from the hardware address
    pub dev_eui: Option<DevEui>,
    /// Root key
    pub app_key: Option<AppKey>,
}

impl OtaaProvisioning {
    /// Build from raw provisioned values given least-significant byte first
    ///
    /// An all-zero DevEUI is treated as unset, an all-zero AppKey as absent.
    pub const fn new(app_eui: [u8; 8], dev_eui: Option<[u8; 8]>, app_key: [u8; 16]) -> Self {
        let dev_eui = match dev_eui {
            Some(bytes) => {
                let eui = DevEui::from_lsb(bytes);
                if eui.is_zero() {
                    None
                } else {
                    Some(eui)
                }
            }
            None => None,
        };
        let app_key = AppKey::new(app_key);
        Self {
            app_eui: AppEui::from_lsb(app_eui),
            dev_eui,
            app_key: if app_key.is_zero() {
                None
            } else {
                Some(app_key)
            },
        }
    }

    /// Resolve the DevEUI using the default [`Eui48Expansion`]
    pub fn resolve_dev_eui(&self, mac: Option<&HardwareMac>) -> Result<DevEui, ConfigError> {
        self.resolve_dev_eui_with(mac, &Eui48Expansion)
    }

    /// Resolve the DevEUI
    ///
    /// An explicit DevEUI is returned as is and `derivation` is not called.
    pub fn resolve_dev_eui_with<D: DevEuiDerivation>(
        &self,
        mac: Option<&HardwareMac>,
        derivation: &D,
    ) -> Result<DevEui, ConfigError> {
        match (self.dev_eui, mac) {
            (Some(dev_eui), _) if !dev_eui.is_zero() => Ok(dev_eui),
            (_, Some(mac)) => {
                let dev_eui = derivation.derive(mac);
                #[cfg(feature = "defmt")]
                defmt::debug!("DevEUI derived from {}", mac);
                Ok(dev_eui)
            }
            (_, None) => Err(ConfigError::NoIdentitySource),
        }
    }

    /// Check the root key and resolve the DevEUI
    pub fn validate<D: DevEuiDerivation>(
        &self,
        mac: Option<&HardwareMac>,
        derivation: &D,
    ) -> Result<DeviceIdentity, ConfigError> {
        let app_key = present(self.app_key, Field::AppKey, AppKey::is_zero)?;
        let dev_eui = self.resolve_dev_eui_with(mac, derivation)?;
        Ok(DeviceIdentity {
            app_eui: self.app_eui,
            dev_eui,
            app_key,
        })
    }
}

/// Provisioned fields for one activation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Provisioning {
    /// Session keys and address
    Abp(AbpProvisioning),
    /// Identity and root key
    Otaa(OtaaProvisioning),
}

/// Validated ABP session material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionCredentials {
    nwk_skey: NwkSKey,
    app_skey: AppSKey,
    dev_addr: DevAddr,
}

impl SessionCredentials {
    /// Network session key
    pub const fn nwk_skey(&self) -> &NwkSKey {
        &self.nwk_skey
    }

    /// Application session key
    pub const fn app_skey(&self) -> &AppSKey {
        &self.app_skey
    }

    /// Device address
    pub const fn dev_addr(&self) -> DevAddr {
        self.dev_addr
    }
}

/// Validated OTAA identity with a resolved DevEUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    app_eui: AppEui,
    dev_eui: DevEui,
    app_key: AppKey,
}

impl DeviceIdentity {
    /// Application identifier
    pub const fn app_eui(&self) -> &AppEui {
        &self.app_eui
    }

    /// Device identifier
    pub const fn dev_eui(&self) -> &DevEui {
        &self.dev_eui
    }

    /// Root key
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }
}

/// Credentials returned by [`ActivationConfig::get_credentials`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Credentials<'a> {
    /// ABP session material, installed directly
    Abp(&'a SessionCredentials),
    /// OTAA identity, used for the join exchange
    Otaa(&'a DeviceIdentity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Validated {
    Abp(SessionCredentials),
    Otaa(DeviceIdentity),
}

/// Validated, immutable activation configuration
///
/// Holds the material for exactly one mode. Built once at boot and only read
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivationConfig {
    inner: Validated,
}

impl ActivationConfig {
    /// Validate `provisioning`, deriving an unset DevEUI with [`Eui48Expansion`]
    pub fn new(
        provisioning: &Provisioning,
        mac: Option<&HardwareMac>,
    ) -> Result<Self, ConfigError> {
        Self::with_derivation(provisioning, mac, &Eui48Expansion)
    }

    /// Validate `provisioning` with a custom DevEUI derivation
    pub fn with_derivation<D: DevEuiDerivation>(
        provisioning: &Provisioning,
        mac: Option<&HardwareMac>,
        derivation: &D,
    ) -> Result<Self, ConfigError> {
        let inner = match provisioning {
            Provisioning::Abp(abp) => abp.validate().map(Validated::Abp),
            Provisioning::Otaa(otaa) => otaa.validate(mac, derivation).map(Validated::Otaa),
        };
        match inner {
            Ok(inner) => {
                let config = Self { inner };
                #[cfg(feature = "defmt")]
                defmt::info!("activation configured for {}", config.select_mode());
                Ok(config)
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("activation configuration rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Validate the credentials provisioned for [`select_mode`]
    #[cfg(any(
        all(feature = "abp", not(feature = "otaa")),
        all(feature = "otaa", not(feature = "abp"))
    ))]
    pub fn provisioned(mac: Option<&HardwareMac>) -> Result<Self, ConfigError> {
        Self::new(&super::credentials::PROVISIONING, mac)
    }

    /// Mode this configuration activates with
    pub const fn select_mode(&self) -> ActivationMode {
        match self.inner {
            Validated::Abp(_) => ActivationMode::Abp,
            Validated::Otaa(_) => ActivationMode::Otaa,
        }
    }

    /// Credentials for `mode`
    ///
    /// Asking for the mode this configuration was not built for reports the
    /// first field of that mode as missing.
    pub fn get_credentials(&self, mode: ActivationMode) -> Result<Credentials<'_>, ConfigError> {
        match (&self.inner, mode) {
            (Validated::Abp(abp), ActivationMode::Abp) => Ok(Credentials::Abp(abp)),
            (Validated::Otaa(otaa), ActivationMode::Otaa) => Ok(Credentials::Otaa(otaa)),
            (_, ActivationMode::Abp) => Err(ConfigError::MissingField(Field::NwkSKey)),
            (_, ActivationMode::Otaa) => Err(ConfigError::MissingField(Field::AppKey)),
        }
    }
}

fn present<T: Copy>(
    value: Option<T>,
    field: Field,
    is_zero: fn(&T) -> bool,
) -> Result<T, ConfigError> {
    match value {
        Some(v) if !is_zero(&v) => Ok(v),
        _ => {
            #[cfg(feature = "defmt")]
            defmt::warn!("{} missing", field);
            Err(ConfigError::MissingField(field))
        }
    }
}
