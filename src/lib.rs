pub mod cli;
pub mod colormap;
pub mod controller;
pub mod model;
pub mod session;
pub mod viewer;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
