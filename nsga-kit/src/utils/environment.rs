use crate::utils::{GenericResult, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies parallelism settings of the solver.
#[derive(Clone, Debug)]
pub struct Parallelism {
    available_cpus: usize,
    thread_count: usize,
}

impl Default for Parallelism {
    fn default() -> Self {
        let available_cpus = get_cpus();
        Self { available_cpus, thread_count: available_cpus }
    }
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` which uses given amount of threads.
    /// Zero means all available cpus.
    pub fn new(thread_count: usize) -> Self {
        let available_cpus = get_cpus();
        let thread_count = if thread_count == 0 { available_cpus } else { thread_count };

        Self { available_cpus, thread_count }
    }

    /// Returns amount of available cpus.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }

    /// Returns amount of worker threads.
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Creates a thread pool with configured amount of threads.
    pub fn create_thread_pool(&self) -> GenericResult<ThreadPool> {
        ThreadPool::new(self.thread_count)
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A seed for random generators. When not set, it is taken from entropy.
    pub seed: Option<u64>,

    /// Parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(seed: Option<u64>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { seed, parallelism, logger }
    }

    /// Creates an instance of `Environment` with a fixed seed which makes runs repeatable.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(None, Parallelism::default(), Arc::new(|msg| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
