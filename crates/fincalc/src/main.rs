#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use fincalc::cli::{self, Args};
#[cfg(feature = "native")]
use fincalc::platform::NativeStorage;
#[cfg(feature = "native")]
use fincalc::{App, init_logging};
#[cfg(feature = "native")]
use std::process::ExitCode;

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(NativeStorage::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::new(NativeStorage::new(data_dir), args.seed).with_persistence(!args.no_save);

    let code = cli::execute(&mut app, args.command)?;

    tracing::info!("Application shutting down");

    Ok(code)
}

#[cfg(not(feature = "native"))]
fn main() {
    // The web build is used as a library; this exists only for the binary target
    panic!("This binary requires the 'native' feature.");
}
