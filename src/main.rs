mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn load_config() -> anyhow::Result<Config> {
    let path = Config::default_path().context("could not locate configuration")?;
    Config::load(&path, true).with_context(|| format!("failed to load {}", path.display()))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
