use clap::Parser;

mod args;
mod facts;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    match args.command {
        args::Commands::Measure(cmd) => facts::measure_command(cmd),
    }
}
