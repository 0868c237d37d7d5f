use std::io::{self, IsTerminal};
use std::process;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use yamlprint::cliopt::CliOpt;
use yamlprint::model::Person;
use yamlprint::output::{LineWriter, Output, YamlEncoder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let _opt = CliOpt::from_args();

    let mut output = Output::new(Box::new(LineWriter::new(io::stdout())), YamlEncoder::new());

    if let Err(e) = output.write(&Person::new("John", 30)) {
        tracing::error!(kind = ?e.kind(), "{}", e);
        process::exit(1);
    }
}
