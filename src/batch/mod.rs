//! Fixed-size request batching
//!
//! Bulk-write endpoints cap the number of records per request; metric data
//! submission caps at 10. These helpers split a record sequence into
//! consecutive groups of at most `batch_size` and hand each group to a
//! submit operation, sequentially and in order. A failed group aborts the
//! remaining ones; groups already submitted stay submitted. There is no
//! rollback and no partial-completion bookkeeping.

use crate::error::{Error, Result};
use std::future::Future;
use std::mem;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Provider-side cap on records per bulk metric submission request
pub const METRIC_DATA_BATCH: usize = 10;

/// Split `items` into groups of at most `batch_size` and submit each group
///
/// `submit` runs once per group, in group order, each group preserving the
/// original item order. The first failure propagates immediately; groups
/// after it are never attempted. `batch_size` must be positive.
pub fn for_each_batch<T, F>(
    items: impl IntoIterator<Item = T>,
    batch_size: usize,
    mut submit: F,
) -> Result<()>
where
    F: FnMut(Vec<T>) -> Result<()>,
{
    if batch_size == 0 {
        return Err(Error::invalid_batch_size(batch_size));
    }

    let mut group = Vec::with_capacity(batch_size);
    let mut submitted = 0usize;
    for item in items {
        group.push(item);
        if group.len() == batch_size {
            submit(mem::replace(&mut group, Vec::with_capacity(batch_size)))?;
            submitted += 1;
        }
    }
    if !group.is_empty() {
        submit(group)?;
        submitted += 1;
    }

    debug!(groups = submitted, "batch submission complete");
    Ok(())
}

/// Async form of [`for_each_batch`] for submit operations that await I/O
///
/// Groups are still submitted one at a time: each submit future completes
/// before the next group is sent.
pub async fn for_each_batch_async<T, F, Fut>(
    items: impl IntoIterator<Item = T>,
    batch_size: usize,
    mut submit: F,
) -> Result<()>
where
    F: FnMut(Vec<T>) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    if batch_size == 0 {
        return Err(Error::invalid_batch_size(batch_size));
    }

    let mut group = Vec::with_capacity(batch_size);
    let mut submitted = 0usize;
    for item in items {
        group.push(item);
        if group.len() == batch_size {
            submit(mem::replace(&mut group, Vec::with_capacity(batch_size))).await?;
            submitted += 1;
        }
    }
    if !group.is_empty() {
        submit(group).await?;
        submitted += 1;
    }

    debug!(groups = submitted, "batch submission complete");
    Ok(())
}
