pub mod renderer;

pub use renderer::render_rule_chart;
