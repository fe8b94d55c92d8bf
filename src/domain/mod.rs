pub mod catalog;
pub mod criteria;
pub mod favorites;
pub mod listing;
pub mod pagination;
pub mod query;
