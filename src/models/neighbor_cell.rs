use fieldcheck::{format_of, range, Bound, Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use super::defaults::provided;
use super::limits::{MAX_CELL_ID, MAX_PCI, MAX_TAC, MIN_TAC};

const FORMAT_PLMN: &str = "plmn";

/// An entry of the LTE neighbour cell list.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeighborCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cio: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earfcn: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pci: Option<u32>,
    #[serde(default, skip_serializing_if = "super::defaults::is_blank")]
    pub plmn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tac: Option<u32>,
}

// MCC (3 digits) followed by MNC (2 or 3 digits).
fn is_plmn(value: &str) -> bool {
    matches!(value.len(), 5 | 6) && value.bytes().all(|b| b.is_ascii_digit())
}

impl Validate for NeighborCell {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(cell_id) = self.cell_id {
            v.check(range(
                "cell_id",
                cell_id,
                None,
                Some(Bound::Inclusive(MAX_CELL_ID)),
            ));
        }
        if let Some(pci) = self.pci {
            v.check(range("pci", pci, None, Some(Bound::Inclusive(MAX_PCI))));
        }
        if let Some(plmn) = provided(&self.plmn) {
            v.check(format_of("plmn", FORMAT_PLMN, plmn, is_plmn));
        }
        if let Some(tac) = self.tac {
            v.check(range(
                "tac",
                tac,
                Some(Bound::Inclusive(MIN_TAC)),
                Some(Bound::Inclusive(MAX_TAC)),
            ));
        }
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor() -> NeighborCell {
        NeighborCell {
            plmn: Some("00101".to_string()),
            cell_id: Some(13575222),
            earfcn: Some(3101),
            pci: Some(76),
            tac: Some(1),
            q_offset: Some(-24),
            cio: Some(-24),
            index: Some(1),
            enable: Some(true),
        }
    }

    #[test]
    fn test_valid_neighbor() {
        assert!(neighbor().validate().is_ok());
    }

    #[test]
    fn test_plmn_format() {
        assert!(is_plmn("00101"));
        assert!(is_plmn("310410"));
        assert!(!is_plmn("0010"));
        assert!(!is_plmn("00a01"));

        let cell = NeighborCell {
            plmn: Some("1234".to_string()),
            ..neighbor()
        };
        assert_eq!(cell.validate().unwrap_err().violations()[0].path(), "plmn");
    }

    #[test]
    fn test_pci_and_tac_limits() {
        let cell = NeighborCell {
            pci: Some(504),
            tac: Some(0),
            ..neighbor()
        };
        let errors = cell.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.at("pci").is_some());
        assert!(errors.at("tac").is_some());
    }
}
