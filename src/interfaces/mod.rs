pub mod app;
pub mod components;
pub mod design_system;
pub mod view_models;
