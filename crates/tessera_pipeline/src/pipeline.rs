//! Ordered application of transformation passes.
//!
//! Each pass sees exactly the generation the previous pass produced. A run:
//! 1. Hands the current generation and a fresh allocator to the pass
//! 2. Records how far the allocator advanced on the new generation
//! 3. Keeps the new generation and moves on to the next pass

use tessera_foundation::Result;
use tessera_tree::Library;

use crate::config::TranslationConfig;
use crate::passes::{InjectReturnBufferParameters, MoveLooseDeclarationsIntoTypes};
use crate::transformation::Transformation;

// =============================================================================
// Pipeline Output
// =============================================================================

/// Result of running a pipeline.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// The final generation.
    pub library: Library,
    /// Every generation in order, starting with the input.
    pub generations: Vec<Library>,
    /// Names of the passes that ran, in order.
    pub passes_applied: Vec<String>,
}

// =============================================================================
// Pipeline
// =============================================================================

/// An ordered list of passes.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Transformation>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in passes selected by `config`.
    ///
    /// Target-language verification lives with the target language and is
    /// appended by its crate.
    #[must_use]
    pub fn from_config(config: &TranslationConfig) -> Self {
        let pipeline = Self::new().with_pass(MoveLooseDeclarationsIntoTypes::new(
            config.loose_container_name.clone(),
        ));
        if config.inject_return_buffers {
            pipeline.with_pass(InjectReturnBufferParameters)
        } else {
            pipeline
        }
    }

    /// Builder method to append a pass.
    #[must_use]
    pub fn with_pass(mut self, pass: impl Transformation + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Appends a pass.
    pub fn add_pass(&mut self, pass: Box<dyn Transformation>) {
        self.passes.push(pass);
    }

    /// Number of configured passes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Returns true if no passes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Names of the configured passes, in order.
    #[must_use]
    pub fn pass_names(&self) -> Vec<String> {
        self.passes.iter().map(|pass| pass.name().to_string()).collect()
    }

    /// Applies every pass in order.
    ///
    /// # Errors
    ///
    /// Stops at the first pass that produces a structurally invalid tree,
    /// repeats an identity, or drops diagnostics from a declaration it keeps.
    pub fn run(&mut self, library: Library) -> Result<PipelineOutput> {
        self.run_until(library, self.passes.len())
    }

    /// Applies the first `count` passes in order.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::run`].
    pub fn run_until(&mut self, library: Library, count: usize) -> Result<PipelineOutput> {
        let mut generations = vec![library.clone()];
        let mut passes_applied = Vec::new();
        let mut current = library;

        for (index, pass) in self.passes.iter_mut().take(count).enumerate() {
            let generation = index + 1;
            tracing::debug!(pass = pass.name(), generation, "applying pass");

            let ids = current.id_allocator();
            let next = pass
                .transform_library(&current, &ids)?
                .with_allocations_from(&ids);
            next.check_successor_of(&current)?;

            tracing::debug!(
                pass = pass.name(),
                generation,
                next_id = ids.peek(),
                "applied pass"
            );

            passes_applied.push(pass.name().to_string());
            generations.push(next.clone());
            current = next;
        }

        Ok(PipelineOutput {
            library: current,
            generations,
            passes_applied,
        })
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("passes", &self.pass_names())
            .finish()
    }
}
