use core::fmt;

/// Provisioned field named by [`ConfigError::MissingField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// ABP network session key
    NwkSKey,
    /// ABP application session key
    AppSKey,
    /// ABP device address
    DevAddr,
    /// OTAA root key
    AppKey,
}

impl Field {
    /// Name of the field as network consoles print it
    pub const fn name(self) -> &'static str {
        match self {
            Field::NwkSKey => "NwkSKey",
            Field::AppSKey => "AppSKey",
            Field::DevAddr => "DevAddr",
            Field::AppKey => "AppKey",
        }
    }
}

/// Activation configuration error
///
/// Every variant is fatal: the radio stack must not be started with the
/// configuration that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Both or neither of ABP and OTAA are enabled
    AmbiguousMode,
    /// A field required by the active mode is absent or all zero
    MissingField(Field),
    /// OTAA DevEUI is unset and no hardware address was supplied
    NoIdentitySource,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AmbiguousMode => {
                f.write_str("exactly one of ABP or OTAA activation must be enabled")
            }
            ConfigError::MissingField(field) => {
                write!(f, "required field {} is missing or zero", field)
            }
            ConfigError::NoIdentitySource => {
                f.write_str("DevEUI is unset and no hardware address is available")
            }
        }
    }
}
