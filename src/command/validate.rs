use anyhow::{anyhow, Result};

use enodeb_cfg::codec;
use enodeb_cfg::models::{EnodebConfiguration, PowerControlParameters, Validate};

use crate::argsets::{RecordKind, ValidateArgs};
use crate::helpers::read_payload;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let payload = read_payload(&args.path)?;
    let result = match args.record {
        RecordKind::Enodeb => codec::decode::<EnodebConfiguration>(&payload)?.validate(),
        RecordKind::PowerControl => codec::decode::<PowerControlParameters>(&payload)?.validate(),
    };

    match result {
        Ok(()) => {
            log::info!("{} is valid", args.path.display());
            println!("valid");
            Ok(())
        }
        Err(errors) => {
            let leaves = errors.leaves();
            for violation in &leaves {
                println!("{violation}");
            }
            Err(anyhow!(
                "configuration has {} violation(s)",
                leaves.len()
            ))
        }
    }
}
