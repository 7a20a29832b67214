use std::path::Path;

use env_logger::Env;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    logo_generator::run_batch(Path::new("brands.json"), Path::new("."))
}
