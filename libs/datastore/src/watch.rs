use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::StoreResult;
use crate::json_file::JsonFile;

/// How often the watcher polls the file's modification time.
///
/// Polling trades immediacy for portability: a change is noticed at most
/// one interval after it lands. Callers that cannot tolerate that window
/// must revalidate against [`JsonFile::modified`] on their read path.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Spawn a background task that invokes `on_change` whenever the file's
/// modification time moves, regardless of which process wrote it.
///
/// The initial stat happens before the task is spawned; a file that cannot
/// be stat-ed at startup is an error the caller should treat as fatal.
pub fn spawn_change_watcher(
    file: Arc<JsonFile>,
    interval: Duration,
    on_change: impl Fn() + Send + 'static,
) -> StoreResult<JoinHandle<()>> {
    let mut last: SystemTime = file.modified()?;

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match file.modified() {
                Ok(mtime) if mtime != last => {
                    last = mtime;
                    tracing::debug!(path = %file.path().display(), "data file modification observed");
                    on_change();
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(path = %file.path().display(), "failed to stat data file: {err}");
                }
            }
        }
    });

    Ok(handle)
}
