pub mod config;
pub mod day;
pub mod export_conf;
pub mod import_conf;
