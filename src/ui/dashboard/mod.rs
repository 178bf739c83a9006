//! Terminal dashboard
//!
//! State, update logic and rendering for the live sensor view

pub mod components;
pub mod renderer;
pub mod state;
pub mod terminal_chart;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
