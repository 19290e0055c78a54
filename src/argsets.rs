use std::path::PathBuf;
use std::str::FromStr;

/// Which record type a payload holds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RecordKind {
    #[default]
    Enodeb,
    PowerControl,
}

impl FromStr for RecordKind {
    type Err = &'static str;
    fn from_str(value: &str) -> Result<Self, &'static str> {
        match value {
            "enodeb" => Ok(Self::Enodeb),
            "power-control" => Ok(Self::PowerControl),
            _ => Err("record must be one of 'enodeb', 'power-control'"),
        }
    }
}

pub struct ValidateArgs {
    pub record: RecordKind,
    pub path: PathBuf,
}

pub struct NormalizeArgs {
    pub record: RecordKind,
    pub path: PathBuf,
}
