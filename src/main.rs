use clap::Parser;
use lineshell::cli::ShellArgs;
use lineshell::config::ShellConfig;
use std::process::exit;

fn main() {
    let args = ShellArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    if let Err(e) = lineshell::run_shell(ShellConfig::default()) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
