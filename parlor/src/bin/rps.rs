use std::io;

use parlor_core::rps::{self, RandomOpponent};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut opponent = RandomOpponent::new(rand::thread_rng());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let verdict = rps::play_round(&mut stdin.lock(), &mut stdout, &mut opponent)?;
    log::info!("round finished: {:?}", verdict.map(|v| v.outcome));

    Ok(())
}
