//! Configuration records exchanged with the provisioning API.
//!
//! Every record derives `Deserialize`/`Serialize` for the JSON wire shape and
//! implements [`Validate`] for its field constraints. Decoding never runs
//! validation; callers decode first and then call `validate()`.

mod device_class;
mod enodeb_configuration;
mod ho_algorithm;
mod management_server;
mod neighbor_cell;
mod neighbor_frequency;
mod power_control;
mod sync_1588;

pub mod limits;

pub use device_class::{DeviceClass, DEVICE_CLASSES};
pub use enodeb_configuration::{EnodebConfiguration, BANDWIDTHS_MHZ};
pub use fieldcheck::{Validate, ValidationErrors, Violation};
pub use ho_algorithm::HoAlgorithmConfiguration;
pub use management_server::ManagementServer;
pub use neighbor_cell::NeighborCell;
pub use neighbor_frequency::NeighborFrequency;
pub use power_control::PowerControlParameters;
pub use sync_1588::Sync1588;

mod defaults {
    use serde::{Deserialize, Deserializer};

    /// Accepts an explicit `null` where a list is expected.
    pub(super) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub(super) fn is_blank(value: &Option<String>) -> bool {
        value.as_deref().map_or(true, str::is_empty)
    }

    /// Optional strings are only checked when they carry text.
    pub(super) fn provided(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|s| !s.is_empty())
    }
}
