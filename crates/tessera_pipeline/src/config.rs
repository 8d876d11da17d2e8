//! Configuration for a translation run.

use tessera_abi::{AbiResolver, DEFAULT_DLL_FILE_NAME, TargetAbi, TargetAbiKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default name of the container that hosts file-scope functions and constants.
pub const DEFAULT_LOOSE_CONTAINER_NAME: &str = "Globals";

/// Configuration for a translation run.
///
/// Controls which ABI policies resolve functions and which built-in passes
/// the default pipeline applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranslationConfig {
    /// ABI whose value-return and destructor mangling policies are used.
    pub target_abi: TargetAbiKind,

    /// Native module every function is imported from.
    pub dll_file_name: String,

    /// Name of the synthesized container for file-scope functions and constants.
    pub loose_container_name: String,

    /// Whether hidden return-buffer parameters are materialized.
    pub inject_return_buffers: bool,

    /// Whether the target-language verifier runs after the other passes.
    pub verify: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            target_abi: TargetAbiKind::MicrosoftX64,
            dll_file_name: DEFAULT_DLL_FILE_NAME.to_string(),
            loose_container_name: DEFAULT_LOOSE_CONTAINER_NAME.to_string(),
            inject_return_buffers: true,
            verify: true,
        }
    }
}

impl TranslationConfig {
    /// Creates the default configuration (Microsoft x64, every pass enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for the Itanium ABI on x86-64.
    #[must_use]
    pub fn itanium_x64() -> Self {
        Self {
            target_abi: TargetAbiKind::ItaniumX64,
            ..Self::default()
        }
    }

    /// Creates a configuration that only hosts loose declarations.
    ///
    /// Useful for inspecting the tree as ingested.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            inject_return_buffers: false,
            verify: false,
            ..Self::default()
        }
    }

    /// Builder method to set the target ABI.
    #[must_use]
    pub fn with_target_abi(mut self, target_abi: TargetAbiKind) -> Self {
        self.target_abi = target_abi;
        self
    }

    /// Builder method to set the native module name.
    #[must_use]
    pub fn with_dll_file_name(mut self, name: impl Into<String>) -> Self {
        self.dll_file_name = name.into();
        self
    }

    /// Builder method to set the loose container name.
    #[must_use]
    pub fn with_loose_container_name(mut self, name: impl Into<String>) -> Self {
        self.loose_container_name = name.into();
        self
    }

    /// Builder method to enable/disable return-buffer injection.
    #[must_use]
    pub fn with_inject_return_buffers(mut self, inject: bool) -> Self {
        self.inject_return_buffers = inject;
        self
    }

    /// Builder method to enable/disable the verifier.
    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Creates the resolver this configuration describes.
    #[must_use]
    pub fn resolver(&self) -> AbiResolver {
        AbiResolver::new(TargetAbi::new(self.target_abi))
            .with_dll_file_name(self.dll_file_name.clone())
    }
}
