use fieldcheck::{range, Bound, Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use super::limits::MAX_PB;

/// Downlink power settings for an eNodeB.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PowerControlParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pa: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_class: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_signal_power: Option<i32>,
}

impl Validate for PowerControlParameters {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(pb) = self.pb {
            v.check(range(
                "pb",
                pb,
                Some(Bound::Inclusive(0)),
                Some(Bound::Inclusive(MAX_PB)),
            ));
        }
        v.finish()
    }
}
