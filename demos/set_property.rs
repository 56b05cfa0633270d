//! Set one property, or apply a JSON preset, on an already-open DCAM session.
//!
//! ```text
//! cargo run --example set_property --features native -- --handle 140234 --property EXPOSURETIME --value 0.01
//! cargo run --example set_property --features native -- --handle 140234 --preset exposure.json
//! ```

use clap::Parser;
use dcam4::{DeviceHandle, NativeApi, Preset, PropertyId, PropertySetter, apply_preset};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Set DCAM camera properties on an open session")]
struct Args {
    /// Session handle (decimal)
    #[arg(long)]
    handle: u64,

    /// Property as a decimal code, 0x-prefixed hex code or DCAM_IDPROP_ name
    #[arg(long, requires = "value", conflicts_with = "preset")]
    property: Option<PropertyId>,

    /// Value to assign
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,

    /// JSON preset to apply instead of a single property
    #[arg(long)]
    preset: Option<std::path::PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let handle = DeviceHandle::new(args.handle);
    let setter = PropertySetter::with_stdout(NativeApi);

    match (args.property, args.value, args.preset) {
        (Some(property), Some(value), None) => {
            setter.set_property(handle, property, value);
        }
        (None, _, Some(path)) => {
            let preset = Preset::from_path(&path)?;
            let report = apply_preset(&setter, handle, &preset);
            println!(
                "{} of {} settings applied",
                report.succeeded(),
                report.attempted
            );
        }
        _ => {
            eprintln!("either --property with --value, or --preset, is required");
            std::process::exit(2);
        }
    }

    Ok(())
}
