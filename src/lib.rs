pub mod domain;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod report;
