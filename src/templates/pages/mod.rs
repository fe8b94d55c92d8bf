pub mod browse;
pub mod detail;

pub use browse::{browse_page, BrowseVm};
pub use detail::detail_page;
