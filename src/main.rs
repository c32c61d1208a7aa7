use anyhow::Result;
use galaxy::{driver, CrosstermTerminal, FrameDriver, Galaxy, Settings};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::default();
    let mut term = CrosstermTerminal::stdout();
    let (width, height) = driver::setup(&mut term, &settings)?;
    log::info!("grid {}x{}, seed {}", width, height, settings.seed);

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut galaxy = Galaxy::new(width, height, &mut rng);

    // runs until the process is killed
    FrameDriver::from_settings(&settings).run(&mut galaxy, &mut term, |_| true)?;
    Ok(())
}
