mod command;
mod logging;
mod plot;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
