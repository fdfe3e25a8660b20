pub mod finder;
pub mod print;
