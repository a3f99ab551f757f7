/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A cluster of at most `N` concurrent workers.
//!
//! This is a thin layer over a dedicated `rayon` pool.  Owning the pool
//! (rather than using the global one) is what gives the hard cap: a job
//! submitted while every worker is busy simply waits in the pool's queue.
//!
//! Nothing here is shared between jobs.  Each closure must own or borrow
//! disjoint data; the `Send`/`Sync` bounds enforce the rest.

#[macro_use] extern crate log;

use ::rayon::prelude::*;

pub type Result<T> = ::std::result::Result<T, ParError>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParError {
    #[error("a cluster needs at least one worker")]
    NoWorkers,

    #[error("could not start worker threads: {0}")]
    Build(#[from] ::rayon::ThreadPoolBuildError),
}

#[derive(Debug)]
pub struct ParCluster {
    pool: ::rayon::ThreadPool,
    max_procs: usize,
}

impl ParCluster {
    pub fn new(max_procs: usize) -> Result<Self> {
        if max_procs == 0 {
            return Err(ParError::NoWorkers);
        }
        let pool = {
            ::rayon::ThreadPoolBuilder::new()
                .num_threads(max_procs)
                .thread_name(|i| format!("cmat-worker-{}", i))
                .build()?
        };
        debug!("started cluster of {} workers", max_procs);
        Ok(ParCluster { pool, max_procs })
    }

    /// One worker per logical cpu.
    pub fn with_all_cpus() -> Result<Self>
    { ParCluster::new(::num_cpus::get()) }

    pub fn max_procs(&self) -> usize
    { self.max_procs }

    /// Run `f` on every item.  Output order matches input order.
    pub fn map<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync + Send,
    { self.pool.install(|| items.into_par_iter().map(f).collect()) }

    /// Like `map`, but stops handing out new items after the first error.
    ///
    /// Jobs already in flight are allowed to finish.  Which error is
    /// reported is unspecified when more than one job fails.
    pub fn try_map<T, R, E, F>(&self, items: Vec<T>, f: F) -> ::std::result::Result<Vec<R>, E>
    where
        T: Send,
        R: Send,
        E: Send,
        F: Fn(T) -> ::std::result::Result<R, E> + Sync + Send,
    { self.pool.install(|| items.into_par_iter().map(f).collect()) }

    /// Spawn-and-wait.  Every job spawned on the scope has finished by the
    /// time this returns.
    pub fn scope<'scope, OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce(&::rayon::Scope<'scope>) -> R + Send,
        R: Send,
    { self.pool.scope(op) }
}
