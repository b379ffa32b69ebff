pub mod deck;
pub mod errors;
pub mod models;
pub mod quiz;
pub mod score;

pub use deck::*;
pub use errors::*;
pub use models::*;
pub use quiz::*;
pub use score::*;
