mod argsets;
mod command;
mod constants;
mod helpers;

use anyhow::{anyhow, Result};
use env_logger::Env;

use argsets::RecordKind;
use constants::{defaults, envvars};

const CMD_VALIDATE: &str = "validate";
const CMD_NORMALIZE: &str = "normalize";
const CMD_DEVICE_CLASSES: &str = "device-classes";

const OPT_RECORD: &str = "--record";

fn main() -> Result<()> {
    helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(argsets::ValidateArgs {
            record: record_kind(&mut args)?,
            path: args.free_from_str()?,
        }),
        Some(CMD_NORMALIZE) => command::normalize(argsets::NormalizeArgs {
            record: record_kind(&mut args)?,
            path: args.free_from_str()?,
        }),
        Some(CMD_DEVICE_CLASSES) => command::device_classes(),
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'normalize', 'device-classes'"
        )),
    }
}

fn record_kind(args: &mut pico_args::Arguments) -> Result<RecordKind> {
    Ok(args
        .opt_value_from_str::<_, RecordKind>(OPT_RECORD)?
        .unwrap_or_default())
}
