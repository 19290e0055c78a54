use fieldcheck::{range, Bound, Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use super::limits::{MAX_RESELECTION_PRIORITY, MAX_RESEL_THRESH, MAX_T_RESELECTION_EUTRA};

/// An inter-frequency carrier advertised for cell reselection.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeighborFrequency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earfcn: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_offset_range: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_rx_lev_min_sib5: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resel_thresh_high: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resel_thresh_low: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reselection_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_reselection_eutra: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_reselection_eutra_sf_medium: Option<u32>,
}

impl Validate for NeighborFrequency {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        for (path, value, max) in [
            ("resel_thresh_high", self.resel_thresh_high, MAX_RESEL_THRESH),
            ("resel_thresh_low", self.resel_thresh_low, MAX_RESEL_THRESH),
            (
                "reselection_priority",
                self.reselection_priority,
                MAX_RESELECTION_PRIORITY,
            ),
            (
                "t_reselection_eutra",
                self.t_reselection_eutra,
                MAX_T_RESELECTION_EUTRA,
            ),
        ] {
            if let Some(value) = value {
                v.check(range(path, value, None, Some(Bound::Inclusive(max))));
            }
        }
        v.finish()
    }
}
