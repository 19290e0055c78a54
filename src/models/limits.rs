//! Numeric limits shared by the serving cell and its neighbours.

pub const MAX_CELL_ID: i64 = 268_435_455; // 28-bit E-UTRAN cell identity
pub const MAX_PCI: i64 = 503;
pub const MIN_TAC: i64 = 1;
pub const MAX_TAC: i64 = 65_535;
pub const MAX_SPECIAL_SUBFRAME_PATTERN: i64 = 9;
pub const MAX_SUBFRAME_ASSIGNMENT: i64 = 6;
pub const MAX_PB: i64 = 3;
pub const MAX_RESELECTION_PRIORITY: i64 = 7;
pub const MAX_T_RESELECTION_EUTRA: i64 = 7;
pub const MAX_RESEL_THRESH: i64 = 31;
pub const MAX_PTP_DOMAIN: i64 = 255;
pub const MIN_PORT: i64 = 1;
pub const MAX_PORT: i64 = 65_535;
