//! The extraction core: the total single-file service and the bounded
//! concurrent batch dispatcher built on top of it.

pub mod batch;
pub mod service;

pub use batch::{
    dispatch, effective_worker_count, extract_batch, DEFAULT_MAX_WORKERS, MAX_WORKERS_CEILING,
};
pub use service::ExtractionService;
