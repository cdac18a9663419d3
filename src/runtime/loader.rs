use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};
use tracing::debug;

use crate::{
    error::ConvertResult,
    source::{StationLog, StationLogFile},
};

/// Limits for [`load_station_logs`].
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Files read at the same time.
    pub max_concurrent_reads: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_concurrent_reads: 8,
        }
    }
}

/// Reads and tokenizes every file concurrently.
///
/// Results come back in the order of `files`, not completion order. The first
/// I/O failure fails the whole load.
pub async fn load_station_logs(
    files: Vec<StationLogFile>,
    cfg: LoaderConfig,
) -> ConvertResult<Vec<StationLog>> {
    let permits = Arc::new(Semaphore::new(cfg.max_concurrent_reads.max(1)));
    let mut tasks = JoinSet::new();

    let total = files.len();
    for (idx, file) in files.into_iter().enumerate() {
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let text = tokio::fs::read_to_string(&file.path).await?;
            debug!(file = %file.filename, "loaded station log");
            Ok::<_, std::io::Error>((idx, StationLog::parse(file, &text)))
        });
    }

    let mut slots: Vec<Option<StationLog>> = (0..total).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (idx, log) = joined??;
        slots[idx] = Some(log);
    }

    Ok(slots.into_iter().flatten().collect())
}
