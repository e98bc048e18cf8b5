pub mod classify;
pub mod encsniff;
pub mod error;
pub mod io;
pub mod utils;

pub use classify::{classify_bytes, Category};
pub use encsniff::{config::{ClassifierConfig, ScanStrategy}, Classifier};
pub use error::Error;

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Target architecture is not 64-bit - This software is only supported on 64-bit platforms");
