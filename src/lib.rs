// Library exports for the binary and integration tests
pub mod batch;
pub mod config;
pub mod constants;
pub mod draw;
pub mod manifest;
pub mod preset;
pub mod renderer;
pub mod theme;

pub use batch::BatchDriver;
pub use renderer::{render, render_with_preset, Geometry};
pub use theme::{Color, Theme, ThemeSet};
