pub mod calculations;
pub mod models;

pub use calculations::payment::compute;
pub use models::*;
