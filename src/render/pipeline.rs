//! Text-then-fuzzers composition.

use std::sync::{Mutex, PoisonError};

use anyhow::Context as _;

use crate::effects::fuzzer::Fuzzer;
use crate::foundation::error::{ScrawlError, ScrawlResult};
use crate::render::canvas::Canvas;
use crate::text::mono::FontDrawer;

/// Draw `text`, then paint and blend every fuzzer over it.
///
/// Each fuzzer runs as its own rayon task on a private overlay; overlays are source-over
/// blended onto the shared canvas one at a time as their tasks finish. The order overlays land
/// in is not deterministic. The result always has the drawer's bounds.
#[tracing::instrument(skip_all, fields(chars = text.chars().count(), fuzzers = fuzzers.len()))]
pub fn generate(text: &str, drawer: &dyn FontDrawer, fuzzers: &[Box<dyn Fuzzer>]) -> Canvas {
    let base = drawer.draw(text);
    let bounds = base.bounds();
    let shared = Mutex::new(base);

    rayon::scope(|s| {
        for fuzzer in fuzzers {
            let shared = &shared;
            s.spawn(move |_| {
                let layer = fuzzer.overlay(bounds, &mut rand::rng());
                shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .overlay(&layer);
                tracing::trace!(fuzzer = fuzzer.name(), "overlay blended");
            });
        }
    });

    shared.into_inner().unwrap_or_else(PoisonError::into_inner)
}

/// [`generate`] on a caller-provided pool instead of the global one.
pub fn generate_in(
    pool: &rayon::ThreadPool,
    text: &str,
    drawer: &dyn FontDrawer,
    fuzzers: &[Box<dyn Fuzzer>],
) -> Canvas {
    pool.install(|| generate(text, drawer, fuzzers))
}

/// Dedicated rayon pool; `None` lets rayon pick the thread count.
pub fn build_thread_pool(threads: Option<usize>) -> ScrawlResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ScrawlError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("failed to build rayon thread pool")?;
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
