// src/gui/components/mod.rs
pub mod action_bar;
pub mod category_nav;
pub mod data_table;
pub mod footer;
pub mod header;
pub mod navigation;
pub mod tabs;
