use fieldcheck::{range, Bound, Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use super::limits::MAX_RESELECTION_PRIORITY;

/// Handover and idle-mode reselection thresholds.
///
/// Thresholds are signed dBm/dB values as the device expects them; only the
/// reselection priority has a schema limit.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HoAlgorithmConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a1_threshold_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a2_threshold_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a3_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a3_offset_anr: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a4_threshold_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b2_geran_irat_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b2_threshold1_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b2_threshold2_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "super::defaults::is_blank")]
    pub ciphering_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hysteresis: Option<u32>,
    #[serde(default, skip_serializing_if = "super::defaults::is_blank")]
    pub integrity_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_a1_threshold_rsrq: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_a2_threshold_rsrp_irat_volte: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_a2_threshold_rsrq: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_a2_threshold_rsrq_irat_volte: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_inter_anr_a5_threshold_1_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_inter_anr_a5_threshold_2_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_intra_a5_threshold_1_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte_intra_a5_threshold_2_rsrp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qrxlevmin_reselection: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qrxlevmin_selection: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qrxlevminoffset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reselection_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_intrasearch: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_nonintrasearch: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshservinglow: Option<i32>,
    #[serde(default, skip_serializing_if = "super::defaults::is_blank")]
    pub time_to_trigger: Option<String>,
}

impl Validate for HoAlgorithmConfiguration {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(priority) = self.reselection_priority {
            v.check(range(
                "reselection_priority",
                priority,
                None,
                Some(Bound::Inclusive(MAX_RESELECTION_PRIORITY)),
            ));
        }
        v.finish()
    }
}
