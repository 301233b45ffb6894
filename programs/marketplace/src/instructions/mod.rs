pub mod initialize_marketplace;
pub mod make_item;
pub mod get_total_price;
pub mod purchase_item;

pub use initialize_marketplace::*;
pub use make_item::*;
pub use get_total_price::*;
pub use purchase_item::*;
