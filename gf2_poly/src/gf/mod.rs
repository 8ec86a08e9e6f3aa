pub mod arithmetic;
pub mod format;
pub mod polynomial;
