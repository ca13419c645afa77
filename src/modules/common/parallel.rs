use std::{future::Future, sync::Arc};
use tokio::sync::Semaphore;

use crate::{
    modules::error::{code::ErrorCode, GalSyncResult},
    raise_error,
};

/// Run `f` over `iter` with at most `concurrency` tasks in flight, returning
/// the results in completion order. Mailbox workers fold their own failures
/// into the value they return, so one bad mailbox never poisons the join.
pub async fn run_with_limit<I, Item, Fut, F, O>(
    concurrency: usize,
    iter: I,
    f: F,
) -> GalSyncResult<Vec<O>>
where
    I: IntoIterator<Item = Item>,
    Item: Send + 'static,
    Fut: Future<Output = GalSyncResult<O>> + Send + 'static,
    F: Fn(Item) -> Fut + Send + Sync + 'static,
    O: Send + 'static,
{
    let sem = Arc::new(Semaphore::new(concurrency));
    let f = Arc::new(f);
    let mut handles = Vec::new();

    for item in iter {
        let permit = sem.clone().acquire_owned().await.map_err(|e| {
            raise_error!(
                format!("Failed to acquire semaphore: {e}"),
                ErrorCode::InternalError
            )
        })?;
        let f = f.clone();

        handles.push(tokio::spawn(async move {
            let res = f(item).await;
            drop(permit);
            res
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let res = handle.await.map_err(|e| {
            raise_error!(
                format!("Task panicked or was cancelled: {e}"),
                ErrorCode::InternalError
            )
        })?;
        results.push(res?);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_run_with_limit_returns_all_results() {
        let results = run_with_limit(2, 0..8u32, |n| async move { Ok(n * 2) })
            .await
            .unwrap();
        let mut results = results;
        results.sort_unstable();
        assert_eq!(results, vec![0, 2, 4, 6, 8, 10, 12, 14]);
    }

    #[tokio::test]
    async fn test_run_with_limit_bounds_in_flight_tasks() {
        static IN_FLIGHT: AtomicUsize = AtomicUsize::new(0);
        static PEAK: AtomicUsize = AtomicUsize::new(0);

        run_with_limit(3, 0..20u32, |_| async {
            let now = IN_FLIGHT.fetch_add(1, Ordering::SeqCst) + 1;
            PEAK.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            IN_FLIGHT.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        })
        .await
        .unwrap();

        assert!(PEAK.load(Ordering::SeqCst) <= 3);
    }
}
