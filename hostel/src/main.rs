use std::path::Path;

use clap::Parser;
use hostel::settings::dotenv::load_dotenv_files;
use hostel::{app_state, http::setup_http_server, init_telemetry, scheduler::setup_scheduler};
use tokio::time::sleep;
use tracing::info;

#[derive(Parser)]
#[command(name = "hostel")]
#[command(about = "Role-based administration service for a student hostel")]
#[clap(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
enum Commands {
    /// Show current configuration and exit
    Config,
    /// Start the hostel server (default)
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_files = load_dotenv_files(Path::new("."));

    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Config => {
            let settings = app_state::AppState::new_for_config_only().await?;
            println!("{:#?}", &settings);
            return Ok(());
        }
        Commands::Run => {}
    }

    let app_state = app_state::AppState::new().await?;
    init_telemetry::init_tracing(app_state.settings.debug)?;
    for file in &dotenv_files {
        info!("Loaded environment from {}", file.display());
    }

    let mut handles = vec![];

    {
        let handle =
            setup_http_server(app_state.clone(), &app_state.settings.api.bind_address).await?;
        handles.push(handle);
    }

    {
        let handle = setup_scheduler(app_state.clone()).await?;
        handles.push(handle);
    }

    sleep(std::time::Duration::from_millis(100)).await;

    loop {
        // Remove and await completed handles
        handles.retain(|handle| !handle.is_finished());

        if handles.is_empty() {
            info!("All tasks are done");
            break;
        }

        tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;
    }

    Ok(())
}
