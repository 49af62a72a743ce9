use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use papyrus_core::{source_name, ExtractionRequest, ExtractionResult};

use crate::service::ExtractionService;

/// Worker count used when the caller passes nothing or a non-positive value.
pub const DEFAULT_MAX_WORKERS: usize = 4;

/// Upper bound on the worker pool; larger requests clamp down. OCR and PDF
/// parsing are memory- and CPU-heavy, so the cap is deliberately modest.
pub const MAX_WORKERS_CEILING: usize = 32;

pub fn effective_worker_count(requested: Option<i64>) -> usize {
    match requested {
        Some(n) if n > 0 => (n as usize).min(MAX_WORKERS_CEILING),
        _ => DEFAULT_MAX_WORKERS,
    }
}

/// Fan one extraction per file out over a bounded worker pool and collect
/// every outcome. Results arrive in completion order; callers correlate by
/// the `filename` embedded in each result, never by position.
pub async fn extract_batch(
    service: Arc<ExtractionService>,
    paths: Vec<PathBuf>,
    enable_ocr: bool,
    max_workers: Option<i64>,
) -> Vec<ExtractionResult> {
    let job = move |path: PathBuf| {
        let service = service.clone();
        async move {
            let request = ExtractionRequest { path, enable_ocr };
            service.extract(&request).await
        }
    };
    dispatch(paths, max_workers, job).await
}

/// The dispatcher itself, generic over the per-file job so tests can
/// instrument concurrency. Guarantees regardless of per-file outcomes:
/// exactly one result per input, at most `max_workers` jobs in flight, and
/// no failure — not even a panicking job — aborts the rest of the batch.
pub async fn dispatch<F, Fut>(
    paths: Vec<PathBuf>,
    max_workers: Option<i64>,
    job: F,
) -> Vec<ExtractionResult>
where
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = ExtractionResult> + Send + 'static,
{
    let workers = effective_worker_count(max_workers);
    debug!(files = paths.len(), workers, "dispatching batch");

    let semaphore = Arc::new(Semaphore::new(workers));
    let mut tasks = JoinSet::new();
    let mut submitted: HashMap<tokio::task::Id, PathBuf> = HashMap::new();

    for path in paths {
        let semaphore = semaphore.clone();
        let unit = job(path.clone());
        let task_path = path.clone();
        let handle = tasks.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                // The semaphore is never closed while the batch runs; this
                // arm keeps the unit from running unbounded if that changes.
                Err(_) => {
                    return ExtractionResult::failure(
                        source_name(&task_path),
                        format!("Error processing file {}: worker pool closed", task_path.display()),
                        500,
                    )
                }
            };
            unit.await
        });
        submitted.insert(handle.id(), path);
    }

    let mut results = Vec::with_capacity(submitted.len());
    while let Some(joined) = tasks.join_next_with_id().await {
        match joined {
            Ok((id, result)) => {
                submitted.remove(&id);
                results.push(result);
            }
            Err(join_error) => {
                // A panic in one unit is recorded against its file only.
                let path = submitted.remove(&join_error.id());
                let (filename, displayed) = match &path {
                    Some(p) => (source_name(p), p.display().to_string()),
                    None => (String::new(), String::from("<unknown>")),
                };
                error!(file = %displayed, "extraction task aborted: {join_error}");
                results.push(ExtractionResult::failure(
                    filename,
                    format!("Error processing file {displayed}: extraction task aborted: {join_error}"),
                    500,
                ));
            }
        }
    }

    results
}
