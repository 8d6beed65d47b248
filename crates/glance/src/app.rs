use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("glance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Window snapshot tool for second-brain activity matching")
        .long_about(
            "glance captures one snapshot of every window known to the window server, \
             filters out system chrome and noise, classifies well-known applications \
             as important, and prints the result as a JSON array on stdout. On any \
             failure it prints [] and still exits successfully, so callers can treat \
             the output as a best-effort enrichment signal.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
}
