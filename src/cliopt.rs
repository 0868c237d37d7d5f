use structopt::StructOpt;

/// No options of its own; `--help` and `--version` come from structopt.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "yamlprint",
    about = "Encodes a sample record as YAML and prints it to stdout"
)]
pub struct CliOpt {}
