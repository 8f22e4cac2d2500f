pub mod csv_adapter;
pub mod ini_config_adapter;
pub mod text_report_adapter;
