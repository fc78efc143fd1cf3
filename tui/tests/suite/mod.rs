// Aggregates all former standalone integration tests as modules.
mod config_file;
mod navigation_flow;
