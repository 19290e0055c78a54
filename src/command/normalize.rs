use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

use enodeb_cfg::codec;
use enodeb_cfg::models::{EnodebConfiguration, PowerControlParameters};

use crate::argsets::{NormalizeArgs, RecordKind};
use crate::helpers::read_payload;

fn reencode<T: DeserializeOwned + Serialize>(payload: &[u8]) -> Result<String> {
    let record: T = codec::decode(payload)?;
    Ok(codec::encode_pretty(&record)?)
}

/// Prints the canonical encoding of a payload. No validation is done.
pub fn normalize(args: NormalizeArgs) -> Result<()> {
    let payload = read_payload(&args.path)?;
    let normalized = match args.record {
        RecordKind::Enodeb => reencode::<EnodebConfiguration>(&payload)?,
        RecordKind::PowerControl => reencode::<PowerControlParameters>(&payload)?,
    };
    println!("{normalized}");
    Ok(())
}
