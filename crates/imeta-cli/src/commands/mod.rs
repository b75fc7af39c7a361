pub mod check;
pub mod compat;
pub mod completion;
pub mod docs;
pub mod sources;
