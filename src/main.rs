//! toggle-sprint: press Ctrl to toggle a held F9 key.
//!
//! Bind sprint to F9 in game. Each press of left or right Ctrl holds or
//! releases F9 on a virtual keyboard, emulating Java Edition's toggle sprint
//! in games that lack it.
//!
//! Environment:
//! - `RUST_LOG`: log filter (default `info`)
//! - `TOGGLE_SPRINT_SEAT`: udev seat (default `seat0`)
//! - `TOGGLE_SPRINT_QUICK_RELEASE=1`: re-press sprint after closing a GUI or
//!   releasing sneak (for Bedrock edition)

use std::process::ExitCode;

use libmacro::{
    CancellationToken, Context, Result, SPRINT_KEY, SprintConfig, SprintToggle, VirtualKeyboard,
};
use log::LevelFilter;

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn run(config: SprintConfig) -> Result<()> {
    let token = CancellationToken::new();
    token.install_ctrlc()?;

    let keyboard = VirtualKeyboard::create(&config.device_name, SPRINT_KEY)?;
    let mut context = Context::with_seat(&config.seat)?;

    let mut toggle = SprintToggle::new(keyboard, config);
    let result = libmacro::run(&mut context, &token, &mut toggle);
    toggle.shutdown();

    result
}

fn main() -> ExitCode {
    setup_logging();

    let config = SprintConfig::from_env();
    log::info!(
        "starting (seat {}, quick release {}). Press Ctrl+C to exit.",
        config.seat,
        if config.quick_release { "on" } else { "off" }
    );

    match run(config) {
        Ok(()) => {
            log::info!("stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
