pub mod assembler;
pub mod formatter;

pub use assembler::assemble_dashboard;
