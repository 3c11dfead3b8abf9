pub mod build_item;
pub mod check_endpoints_names;
pub mod cli_driver;
pub mod collection_builder;
pub mod command_runner;
pub mod endpoint_table;
pub mod execute;
pub mod postman_api;
pub mod show_endpoint_table;
