pub mod biomarker;
pub mod enums;
pub mod filters;
pub mod lab;

pub use biomarker::*;
pub use enums::*;
pub use filters::*;
pub use lab::*;
