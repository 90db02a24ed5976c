pub mod app;
pub mod status_page;
