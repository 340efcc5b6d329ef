mod client_construction;
mod config_loading;
mod error_classification;
mod tls_floor;
