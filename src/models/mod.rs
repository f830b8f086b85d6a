pub mod product;
pub mod stock;
pub mod cart;
pub mod notice;

pub use product::Product;
pub use stock::Stock;
pub use cart::Cart;
pub use notice::{CartEvent, Notice, NoticeKind};
