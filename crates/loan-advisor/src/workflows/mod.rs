pub mod import;
pub mod loans;
