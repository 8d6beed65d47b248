use glance_core::init_logging;

mod app;
mod commands;

fn main() {
    let matches = app::build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    commands::run(&matches);
}
