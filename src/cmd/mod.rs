pub mod output;
pub mod streams;
pub mod viewers;
