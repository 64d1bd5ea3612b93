pub mod header;
pub mod match_gauge;
pub mod results_panel;
pub mod settings_panel;
pub mod upload_slot;
