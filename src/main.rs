mod window;

use fbpong::error::HostError;
use fbpong::HostConfig;

fn main() -> Result<(), HostError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HostConfig::from_env();
    log::info!("fbpong starting at {}x scale", config.scale);

    let (ev_loop, mut app) = window::init_window(config)?;
    ev_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
