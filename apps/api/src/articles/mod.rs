// Articles: live wellness news with a curated fallback set.

pub mod category;
pub mod fallback;
pub mod fetcher;
pub mod handlers;
pub mod models;
