//! LoRaWAN activation material for end devices
//!
//! This crate holds the credentials a LoRaWAN end device needs to get on a
//! network and hands them to the MAC layer in the byte order the wire expects.
//! It supports both activation methods of LoRaWAN 1.0.x:
//!
//! - ABP: the network and application session keys and the device address
//!   are provisioned directly and installed as a session at boot.
//! - OTAA: the AppEUI, DevEUI and AppKey are provisioned and handed to the
//!   MAC layer, which derives the session from a join exchange.
//!
//! The activation mode is a build-time choice made with the `abp` (default)
//! or `otaa` cargo feature. Enabling both, or neither, fails the build.
//!
//! # Features
//! - Distinct byte-order-typed newtypes for every key and identifier
//! - One-shot validation into an immutable [`config::ActivationConfig`]
//! - DevEUI derivation from a hardware MAC address
//! - Uplink addressing header and AES-CMAC MIC over the provisioned keys
//! - Optional `defmt` logging
//! - No unsafe code, no allocator
//!
//! Everything else about frames (payload encryption, FOpts, downlinks) and
//! the join exchange belongs to the MAC layer.
//!
//! # Example
//! ```no_run
//! use lorawan_activation::{
//!     config::{select_mode, ActivationConfig, HardwareMac},
//!     session::{activate, Activation},
//! };
//!
//! // MAC address read from the radio module or the MCU efuses
//! let mac = HardwareMac::new([0x24, 0x0A, 0xC4, 0x12, 0x34, 0x56]);
//!
//! let config = ActivationConfig::provisioned(Some(&mac)).unwrap();
//! assert_eq!(config.select_mode(), select_mode());
//!
//! match activate(&config).unwrap() {
//!     Activation::Session(session) => {
//!         // MAC layer appends FPort and FRMPayload, then signs the frame
//!         let header = session.uplink_header();
//!         let mic = session.uplink_mic(&header);
//! #       let _ = mic;
//!     }
//!     Activation::Join(identity) => {
//!         // MAC layer runs the join exchange with AppEUI, DevEUI and AppKey
//! #       let _ = identity;
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![no_std]
#![forbid(unsafe_code)]

/// Activation mode, provisioned credentials and their validation
pub mod config;

/// Cryptographic functions
pub mod crypto;

/// Configuration errors
pub mod error;

/// Uplink addressing header
pub mod frame;

/// Boot-time hand-off to the MAC layer
pub mod session;

pub use config::{select_mode, ActivationConfig, ActivationMode};
pub use error::ConfigError;
