pub mod analytics;
pub mod cli;
pub mod constants;
pub mod logging;
pub mod model;
pub mod scan;
pub mod show;
pub mod source;
pub mod store;
pub mod universe;
