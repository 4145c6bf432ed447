//! Pure data structures persisted in the store.

pub mod cart;
pub mod order;
pub mod product;
pub mod settings;
pub mod user;

pub use cart::*;
pub use order::*;
pub use product::*;
pub use settings::*;
pub use user::*;
