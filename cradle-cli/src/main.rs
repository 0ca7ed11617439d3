mod tui;

use cradle_core::logging::LoggingConfig;

use crate::tui::app::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs stay off unless CRADLE_LOG_LEVEL asks for them, the terminal
    // belongs to the form. A second init (tests, reruns) is not fatal.
    let _ = LoggingConfig::from_env().init();

    App::new().run().await
}
