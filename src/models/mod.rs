pub mod args;
pub mod cli_step;
pub mod collection;
pub mod command_output;
pub mod endpoint_descriptor;
pub mod error;
pub mod result;
pub mod run_option;
