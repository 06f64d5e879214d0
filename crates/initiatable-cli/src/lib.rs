//! Command-line front end for `initiatable`.
//!
//! Documents are element trees in JSON, the same shape [`initiatable::Element`]
//! serializes to:
//!
//! ```json
//! {"tag": "table", "attributes": {"data-role": "datatable", "data-dt_paging": "false"}}
//! ```

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, Format};
