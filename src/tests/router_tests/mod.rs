mod browse_tests;
mod export_tests;
mod toggle_tests;
