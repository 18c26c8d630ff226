pub mod app;
pub mod forum_page;
