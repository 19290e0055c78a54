use fieldcheck::{range, Bound, Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use super::limits::{MAX_PORT, MIN_PORT};

/// TR-069 management (ACS) endpoint pushed to the device.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ManagementServer {
    #[serde(default, skip_serializing_if = "super::defaults::is_blank")]
    pub management_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_server_port: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_server_ssl_enable: Option<bool>,
}

impl Validate for ManagementServer {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(port) = self.management_server_port {
            v.check(range(
                "management_server_port",
                port,
                Some(Bound::Inclusive(MIN_PORT)),
                Some(Bound::Inclusive(MAX_PORT)),
            ));
        }
        v.finish()
    }
}
