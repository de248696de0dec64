mod category;
mod product;

pub use category::Category;
pub use product::{format_price, Product};
