#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// NULL is allowed by the schema; products created through the store always carry one.
    pub category_id: Option<i64>,
}

/// Shortest round-trip decimal, with `.0` kept on whole values.
pub fn format_price(price: f64) -> String {
    let text = price.to_string();
    if price.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

impl Product {
    pub fn belongs_to(&self, category_id: i64) -> bool {
        self.category_id == Some(category_id)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Product(id={}, name='{}', price={}, category_id=",
            self.id,
            self.name,
            format_price(self.price)
        )?;
        match self.category_id {
            Some(cid) => write!(f, "{cid})"),
            None => write!(f, "None)"),
        }
    }
}
