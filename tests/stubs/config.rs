#![allow(dead_code)]
// Not every test binary uses every payload; hence the warning suppression

pub const VALID_PAYLOAD_1: &str = r#"
{
    "bandwidth_mhz": 20,
    "cell_id": 138777000,
    "device_class": "Baicells Nova-243 OD TDD",
    "earfcndl": 39150,
    "managementServer": {
      "management_server": "https://acs.magma.test/tr069",
      "management_server_port": 48080,
      "management_server_ssl_enable": true
    },
    "mme_pool_1": "192.168.60.142",
    "neighbor_cell_list": [
      {
        "index": 1,
        "enable": true,
        "plmn": "00101",
        "cell_id": 13575222,
        "earfcn": 3101,
        "pci": 76,
        "tac": 1,
        "q_offset": -24,
        "cio": -24
      }
    ],
    "neighbor_frequency_list": [
      {
        "index": 1,
        "enable": true,
        "earfcn": 3100,
        "p_max": 6,
        "q_offset_range": -24,
        "q_rx_lev_min_sib5": -30,
        "resel_thresh_high": 6,
        "resel_thresh_low": 5,
        "reselection_priority": 1,
        "t_reselection_eutra": 1
      }
    ],
    "pci": 260,
    "power_control": {
      "pa": 100,
      "pb": 1,
      "power_class": 22,
      "reference_signal_power": -24
    },
    "special_subframe_pattern": 7,
    "subframe_assignment": 2,
    "sync_1588": {
      "sync_1588_switch": true,
      "sync_1588_domain": 0,
      "sync_1588_unicast_enable": true,
      "sync_1588_unicast_serverip": "192.168.60.1"
    },
    "tac": 1,
    "transmit_enabled": true,
    "x2_enable_disable": false
}
"#;

pub const MINIMAL_PAYLOAD: &str = r#"
{
    "cell_id": 0,
    "device_class": "FreedomFi One",
    "transmit_enabled": false
}
"#;

// Well-formed JSON, but breaks several field constraints at once
pub const INVALID_PAYLOAD_1: &str = r#"
{
    "bandwidth_mhz": 7,
    "cell_id": 268435456,
    "device_class": "Baicells Band 40",
    "mme_pool_1": "999.1.1.1",
    "neighbor_cell_list": [
      {"pci": 1},
      {"pci": 504},
      {"pci": 2}
    ],
    "pci": 0,
    "power_control": {"pb": 4},
    "tac": 65536,
    "unknown_field": "ignored"
}
"#;

pub const INVALID_JSON: &str = "blah";
