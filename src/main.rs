use std::process;

use log::debug;
use structopt::{clap::AppSettings, StructOpt};

#[derive(Debug, structopt::StructOpt)]
#[structopt(
    setting = AppSettings::AllowNegativeNumbers,
    setting = AppSettings::DisableHelpFlags,
    setting = AppSettings::DisableVersion
)]
/// Write a list of loopback server addresses to config.txt
struct Options {
    /// Number of servers to list. Zero or negative writes an empty file.
    count: i64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Options::from_args();

    if let Err(e) = gen_server_config::generate(opts.count) {
        debug!("{:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
