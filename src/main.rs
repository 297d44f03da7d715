use std::io;

use dotenv::dotenv;
use env_logger::Env;
use neurostay::{AppConfig, AppError, Console, FrontDesk};

fn main() -> Result<(), AppError> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{err}; using default store locations");
        AppConfig::default()
    });
    log::info!(
        "stores: {} and {}",
        config.bookings_path().display(),
        config.feedback_path().display()
    );

    let desk = FrontDesk::new(&config);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    desk.run(&mut console)
}
