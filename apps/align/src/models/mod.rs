pub mod jd;
pub mod resume;

pub use jd::{JdSource, ProcessedJd};
pub use resume::ResumeDocument;
