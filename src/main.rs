use anyhow::Context;
use generic_addition::{driver, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    let stdout = std::io::stdout();
    driver::run(&mut stdout.lock()).context("failed to write sums to stdout")?;
    Ok(())
}
