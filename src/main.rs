// will uncomment this once it is closer to release
// #![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::as_conversions)]
#![warn(clippy::get_unwrap)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::type_complexity)]
// this isn't super relevant in a binary - if it's actually a problem, we'll
// just get a compilation failure
#![allow(clippy::future_not_send)]

mod app;
mod clock;
mod config;
mod dirs;
mod driver;
mod event;
mod format;
mod info;
mod inputs;
mod logger;
mod prelude;
mod terminal;

use prelude::*;

use clap::Parser as _;

#[derive(clap::Parser)]
#[clap(about = "Analog clock face for the terminal")]
struct Opt {
    /// Milliseconds between redraws
    #[clap(long)]
    interval: Option<u64>,

    /// Rotate the hour hand by the raw 24 hour value
    #[clap(long)]
    unmodded_hour: bool,

    /// Configuration file to read instead of the default one
    #[clap(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn async_main(opt: Opt, offset: time::UtcOffset) -> Result<i32> {
    let mut config = config::Config::load(opt.config.as_deref())?;
    config.apply_overrides(opt.interval, opt.unmodded_hour)?;
    log::info!(
        "starting with a redraw every {}, hour hand {:?}",
        format::interval(config.interval()),
        config.hour_hand()
    );

    app::main(config, offset).await
}

fn main() {
    logger::init();
    // the local offset can only be determined safely while the process
    // is still single threaded
    let offset = info::get_offset();

    match async_main(Opt::parse(), offset) {
        Ok(code) => {
            std::process::exit(code);
        }
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("watchface: {:#}", e);
            std::process::exit(1);
        }
    };
}
