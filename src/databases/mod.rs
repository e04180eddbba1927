pub mod address;
pub mod traits;
