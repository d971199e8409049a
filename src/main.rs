use clap::Parser;

use snapshot_queries::cli::Args;
use snapshot_queries::config::ConfigFile;
use snapshot_queries::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();
    let config = ConfigFile::load_or_default(&args.config)?;
    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}
