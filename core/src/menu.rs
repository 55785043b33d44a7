use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root decoded result of a menu scan.
///
/// A `Menu` is created once per successful upload cycle and discarded whole
/// when the user starts a new scan. There is no mutation after decode, only
/// replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    /// Currency code or symbol applied uniformly to every item price.
    pub currency: String,
    /// Insertion order is display order.
    pub sections: Vec<MenuSection>,
}

/// A named grouping of menu items (e.g. "Mains").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    /// Local list identity, assigned at decode time. Never read from the
    /// wire, never serialized back.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Serving variants, e.g. ["Grilled", "Fried"].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_styles: Option<Vec<String>>,
    pub items: Vec<MenuItem>,
}

/// A single purchasable dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Local list identity, same rule as [`MenuSection::id`].
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Plain number; currency comes from the enclosing [`Menu`].
    pub price: f64,
}

impl Menu {
    /// Render a price with this menu's currency, e.g. `"5.50 EUR"`.
    pub fn format_price(&self, price: f64) -> String {
        format!("{:.2} {}", price, self.currency)
    }
}

// `id` is UI identity only and must not affect equality.
impl PartialEq for MenuSection {
    fn eq(&self, other: &Self) -> bool {
        self.category_name == other.category_name
            && self.description == other.description
            && self.available_styles == other.available_styles
            && self.items == other.items
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.price == other.price
    }
}
