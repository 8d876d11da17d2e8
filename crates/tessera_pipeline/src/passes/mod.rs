//! Built-in transformation passes.

mod loose;
mod rename;
mod return_buffer;

pub use loose::MoveLooseDeclarationsIntoTypes;
pub use rename::RenameDeclarations;
pub use return_buffer::{InjectReturnBufferParameters, RETURN_BUFFER_NAME};
