// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};
use job_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run().wrap_err("job scrape failed")?;
    Ok(())
}
