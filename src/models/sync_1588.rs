use fieldcheck::{ipv4, range, Bound, Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use super::defaults::provided;
use super::limits::MAX_PTP_DOMAIN;

/// IEEE 1588 (PTP) timing synchronisation settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sync1588 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_asymmetry: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_delay_rq_msg_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_domain: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_holdover: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_msg_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_switch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_1588_unicast_enable: Option<bool>,
    #[serde(default, skip_serializing_if = "super::defaults::is_blank")]
    pub sync_1588_unicast_serverip: Option<String>,
}

impl Validate for Sync1588 {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(domain) = self.sync_1588_domain {
            v.check(range(
                "sync_1588_domain",
                domain,
                None,
                Some(Bound::Inclusive(MAX_PTP_DOMAIN)),
            ));
        }
        if let Some(server_ip) = provided(&self.sync_1588_unicast_serverip) {
            v.check(ipv4("sync_1588_unicast_serverip", server_ip));
        }
        v.finish()
    }
}
