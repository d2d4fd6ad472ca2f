pub mod loader;
pub mod report;
pub mod validation;

pub use loader::*;
pub use report::*;
pub use validation::*;
