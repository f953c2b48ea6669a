// Committee List - Core
//
// Loads legislative committees by chamber or by legislator, puts them in
// display order, and models the list screen that shows them.
//
// Infrastructure lives in kernel/, committee logic in domains/committees/.

pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
