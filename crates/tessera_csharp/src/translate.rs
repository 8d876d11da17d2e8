//! End-to-end translation for C#.

use tessera_abi::{FileFacts, build_library};
use tessera_foundation::Result;
use tessera_pipeline::{Pipeline, PipelineOutput, TranslationConfig};

use crate::verifier::TranslationVerifier;

/// The built-in passes for `config`, followed by the verifier when enabled.
#[must_use]
pub fn csharp_pipeline(config: &TranslationConfig) -> Pipeline {
    let pipeline = Pipeline::from_config(config);
    if config.verify {
        pipeline.with_pass(TranslationVerifier)
    } else {
        pipeline
    }
}

/// Ingests `files` and runs the C# pipeline over the result.
///
/// # Errors
///
/// Fails only if a pass produces a structurally invalid tree. Functions with
/// unresolvable ABIs are reported on [`tessera_tree::Library::failures`].
pub fn translate(config: &TranslationConfig, files: &[FileFacts]) -> Result<PipelineOutput> {
    let library = build_library(&config.resolver(), files);
    tracing::debug!(
        target_abi = %config.target_abi,
        files = files.len(),
        failures = library.failures.len(),
        "translating"
    );
    csharp_pipeline(config).run(library)
}
