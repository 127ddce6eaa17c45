//! Utility functions for the encoder layer
pub mod enums;
pub mod types;
pub mod math;
pub mod io;

// Re-export commonly used utilities
pub use enums::*;
pub use types::*;
pub use math::*;
