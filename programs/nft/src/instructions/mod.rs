pub mod create_registry;
pub mod mint_token;
pub mod set_approval_for_all;
pub mod transfer_token;

pub use create_registry::*;
pub use mint_token::*;
pub use set_approval_for_all::*;
pub use transfer_token::*;
