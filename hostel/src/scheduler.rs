use tracing::instrument;

use crate::app_state::SharedAppState;

/// Run the periodic housekeeping jobs until the stop flag is set
pub async fn setup_scheduler(
    app_state: SharedAppState,
) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let stop_flag = app_state.stop_flag.clone();
    let mut scheduler = clokwerk::AsyncScheduler::new();

    {
        // Drop expired login sessions
        let app_state = app_state.clone();
        scheduler
            .every(app_state.settings.scheduler.session_cleanup.into())
            .run(move || {
                let app_state = app_state.clone();
                async move {
                    schedule_session_cleanup(app_state).await;
                }
            });
    }

    let handle = tokio::spawn({
        let stop_flag = stop_flag.clone();
        async move {
            while !stop_flag.is_stopped() {
                scheduler.run_pending().await;
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
            tracing::info!("Scheduler stopped");
            Ok(())
        }
    });

    Ok(handle)
}

#[instrument(skip(app_state))]
async fn schedule_session_cleanup(app_state: SharedAppState) {
    let removed = app_state.sessions.cleanup_expired().await;
    tracing::debug!("Session cleanup removed {} session(s)", removed);
}
