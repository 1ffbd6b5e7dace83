pub mod catalog;
pub mod loading;
pub mod ui;
