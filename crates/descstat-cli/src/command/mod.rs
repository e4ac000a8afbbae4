use clap::Parser;

use self::describe::DescribeArg;

mod describe;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    describe: DescribeArg,
    /// Enable debug logging for the analysis
    #[clap(short, long)]
    verbose: bool,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init(args.verbose);
    describe::run(&args.describe)
}
