// Reusable library API, visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod puzzle;
pub mod report;
pub mod search;
mod soup_char;

pub use grid::{Grid, GridError};
pub use report::{build_report, Report};
pub use search::contains;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
