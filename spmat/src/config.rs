//! Engine configuration

use spmat_core::{HeaderPolicy, MultiplyStrategy};

/// Options that control how matrices are loaded and multiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How the two header lines of an input file are treated
    pub header_policy: HeaderPolicy,
    /// Algorithm used for multiplication
    pub strategy: MultiplyStrategy,
    /// Memory-map input files instead of reading them into a buffer
    pub use_mmap: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header policy
    pub fn with_header_policy(mut self, header_policy: HeaderPolicy) -> Self {
        self.header_policy = header_policy;
        self
    }

    /// Require `rows=`/`cols=` headers that match the entries
    pub fn with_strict_headers(self, strict: bool) -> Self {
        self.with_header_policy(if strict {
            HeaderPolicy::Strict
        } else {
            HeaderPolicy::Advisory
        })
    }

    /// Set the multiplication strategy
    pub fn with_strategy(mut self, strategy: MultiplyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable memory-mapped reads
    ///
    /// Has no effect unless the `mmap` feature is enabled.
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::Advisory,
            strategy: MultiplyStrategy::RowIndexed,
            use_mmap: false,
        }
    }
}
