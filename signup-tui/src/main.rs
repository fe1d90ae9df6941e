mod app;
mod input;
mod logging;
mod terminal;

use std::sync::Arc;
use std::time::Duration;

use log::info;
use signup_form::prelude::*;

use app::App;
use terminal::TerminalGuard;

/// Stand-in network latency, long enough to see the progress label.
const SUBMIT_LATENCY: Duration = Duration::from_millis(800);

async fn run() -> std::io::Result<()> {
    let form = RegistrationForm::with_config(FormConfig::default());
    let handler = Arc::new(LoggingSubmitHandler::new().latency(SUBMIT_LATENCY));

    let mut terminal = TerminalGuard::new()?;
    App::new(form, handler).run(&mut terminal).await
}

#[tokio::main]
async fn main() {
    if let Some(path) = logging::init() {
        info!("Logging to {}", path.display());
    }

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
