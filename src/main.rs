// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Run (default) | List | Log | Options | Inis | Version
//! ```

use std::process::ExitCode;

use streak_rs::cli::args::RunArgs;
use streak_rs::cli::global::GlobalOptions;
use streak_rs::cli::{self, Command};
use streak_rs::cmd::config::{run_inis_command, run_options_command};
use streak_rs::cmd::list::run_list_command;
use streak_rs::cmd::log::run_log_command;
use streak_rs::cmd::run::run_backup_command;
use streak_rs::config::loader::ConfigLoader;
use streak_rs::config::{Config, DEFAULT_CONFIG_FILE};
use streak_rs::logging::init_logging;
use streak_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix of environment variables read as configuration.
const ENV_PREFIX: &str = "STREAK";

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_file_format(global.log_format)
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => build_config_loader(&cli.global)
            .map(|loader| run_inis_command(&loader.format_loaded_files())),
        Some(Command::List(args)) => {
            load_config(&cli.global).and_then(|config| run_list_command(args, &config))
        }
        Some(Command::Log(args)) => {
            load_config(&cli.global).and_then(|config| run_log_command(args, &config))
        }
        Some(Command::Run(args)) => {
            load_config(&cli.global).and_then(|config| run_backup_command(args, &config))
        }
        None => load_config(&cli.global)
            .and_then(|config| run_backup_command(&RunArgs::default(), &config)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> streak_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> streak_rs::error::Result<Config> {
    build_config_loader(global)?.build()
}
