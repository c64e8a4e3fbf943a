use anyhow::Result;
use casefile::{run_batch, GeneratorContext, FAMILY_IDS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ctx = GeneratorContext::new();
    run_batch(&mut ctx, &FAMILY_IDS)?;

    Ok(())
}
