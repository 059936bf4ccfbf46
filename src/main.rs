mod exits;

use log::error;
use revealpass::{Settings, tui};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = tui::run(settings).await {
        error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
