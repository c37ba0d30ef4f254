use serde::{Deserialize, Serialize};

/// Entry on the shared shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub checked: bool,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ShoppingItem {
    pub fn new(id: u64, name: impl Into<String>, quantity: u32, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            checked: false,
            category: category.into(),
            price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Unit price times quantity, when a price is known.
    pub fn line_total(&self) -> Option<f64> {
        self.price.map(|price| price * f64::from(self.quantity))
    }
}
