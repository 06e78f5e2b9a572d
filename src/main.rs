mod app;
mod config;
mod engine;
mod library;
mod player;
mod runtime;
mod ui;
mod watchdog;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
