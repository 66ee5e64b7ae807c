pub mod line;

pub use line::OrderLine;
