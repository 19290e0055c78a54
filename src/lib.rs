//! eNodeB configuration records, their field constraints and JSON codec.
//!
//! ```
//! use enodeb_cfg::codec;
//! use enodeb_cfg::models::{EnodebConfiguration, Validate};
//!
//! let config: EnodebConfiguration = codec::decode_str(
//!     r#"{"cell_id": 1, "device_class": "FreedomFi One", "transmit_enabled": true, "pci": 0}"#,
//! )
//! .unwrap();
//! let errors = config.validate().unwrap_err();
//! assert_eq!(errors.violations()[0].path(), "pci");
//! ```

pub mod codec;
pub mod models;
