use fieldcheck::{
    ipv4, one_of, range, required, required_str, Bound, Validate, ValidationErrors, Validator,
};
use serde::{Deserialize, Serialize};

use super::defaults::{is_blank, null_as_empty, provided};
use super::limits::{
    MAX_CELL_ID, MAX_PCI, MAX_SPECIAL_SUBFRAME_PATTERN, MAX_SUBFRAME_ASSIGNMENT, MAX_TAC, MIN_TAC,
};
use super::{
    DeviceClass, HoAlgorithmConfiguration, ManagementServer, NeighborCell, NeighborFrequency,
    PowerControlParameters, Sync1588, DEVICE_CLASSES,
};

/// Channel bandwidths (MHz) an eNodeB can be configured with.
pub const BANDWIDTHS_MHZ: [u32; 5] = [3, 5, 10, 15, 20];

/// Configuration for an eNodeB.
///
/// Unset optional fields are inherited from the LTE network and gateway
/// configuration. `cell_id`, `device_class` and `transmit_enabled` are
/// required; they are still `Option`s so that a payload missing them can be
/// decoded and reported by [`Validate::validate`] rather than rejected by the
/// decoder. They are always emitted on encode, as `null` when unset.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnodebConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_mhz: Option<u32>,
    #[serde(default)]
    pub cell_id: Option<u32>,
    #[serde(default)]
    pub device_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earfcndl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ho_algorithm_config: Option<HoAlgorithmConfiguration>,
    #[serde(
        rename = "managementServer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub management_server: Option<ManagementServer>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub mme_pool_1: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub mme_pool_2: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub neighbor_cell_list: Vec<Option<NeighborCell>>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub neighbor_frequency_list: Vec<Option<NeighborFrequency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pci: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_control: Option<PowerControlParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_subframe_pattern: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subframe_assignment: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588: Option<Sync1588>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tac: Option<u32>,
    #[serde(default)]
    pub transmit_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2_enable_disable: Option<bool>,
}

impl EnodebConfiguration {
    /// Creates a configuration with only the required fields set.
    pub fn new(cell_id: u32, device_class: DeviceClass, transmit_enabled: bool) -> Self {
        Self {
            cell_id: Some(cell_id),
            device_class: Some(device_class.into()),
            transmit_enabled: Some(transmit_enabled),
            ..Default::default()
        }
    }

    /// The device class, if it names a supported model.
    pub fn known_device_class(&self) -> Option<DeviceClass> {
        self.device_class.as_deref()?.parse().ok()
    }
}

impl Validate for EnodebConfiguration {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();

        if let Some(bandwidth) = self.bandwidth_mhz {
            v.check(one_of("bandwidth_mhz", bandwidth, &BANDWIDTHS_MHZ));
        }

        if let Some(&cell_id) = v.check(required("cell_id", self.cell_id.as_ref())) {
            v.check(range(
                "cell_id",
                cell_id,
                None,
                Some(Bound::Inclusive(MAX_CELL_ID)),
            ));
        }

        if let Some(class) = v.check(required_str("device_class", self.device_class.as_deref())) {
            v.check(one_of("device_class", class, &DEVICE_CLASSES));
        }

        v.nested("ho_algorithm_config", self.ho_algorithm_config.as_ref());
        v.nested("managementServer", self.management_server.as_ref());

        if let Some(pool) = provided(&self.mme_pool_1) {
            v.check(ipv4("mme_pool_1", pool));
        }
        if let Some(pool) = provided(&self.mme_pool_2) {
            v.check(ipv4("mme_pool_2", pool));
        }

        v.each("neighbor_cell_list", &self.neighbor_cell_list);
        v.each("neighbor_frequency_list", &self.neighbor_frequency_list);

        if let Some(pci) = self.pci {
            v.check(range(
                "pci",
                pci,
                Some(Bound::Exclusive(0)),
                Some(Bound::Inclusive(MAX_PCI)),
            ));
        }

        v.nested("power_control", self.power_control.as_ref());

        if let Some(pattern) = self.special_subframe_pattern {
            v.check(range(
                "special_subframe_pattern",
                pattern,
                None,
                Some(Bound::Inclusive(MAX_SPECIAL_SUBFRAME_PATTERN)),
            ));
        }
        if let Some(assignment) = self.subframe_assignment {
            v.check(range(
                "subframe_assignment",
                assignment,
                None,
                Some(Bound::Inclusive(MAX_SUBFRAME_ASSIGNMENT)),
            ));
        }

        v.nested("sync_1588", self.sync_1588.as_ref());

        if let Some(tac) = self.tac {
            v.check(range(
                "tac",
                tac,
                Some(Bound::Inclusive(MIN_TAC)),
                Some(Bound::Inclusive(MAX_TAC)),
            ));
        }

        v.check(required("transmit_enabled", self.transmit_enabled.as_ref()));

        let result = v.finish();
        if let Err(errors) = &result {
            log::debug!(
                "enodeb configuration for cell {:?} has {} violation(s)",
                self.cell_id,
                errors.len()
            );
        }
        result
    }
}
