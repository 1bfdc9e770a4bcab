//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    validation::{ValidationError, parse_price, parse_quantity},
    views::Tone,
};

/// Products with fewer units than this are low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Server-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    #[serde(rename = "nome")]
    pub name: String,

    /// Optional free-text description
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,

    /// Unit price
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units in stock
    #[serde(rename = "quantidade_estoque")]
    pub quantity: u32,
}

impl Product {
    /// Value of the units in stock (`price × quantity`), saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn stock_value(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Whether the product is under the low-stock threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Two-tier catalog badge.
    #[must_use]
    pub fn badge(&self) -> ProductBadge {
        ProductBadge::for_quantity(self.quantity)
    }

    /// Three-tier stock level.
    #[must_use]
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_quantity(self.quantity)
    }

    /// The product's current fields as an update body.
    #[must_use]
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }

    /// An update body that keeps every field but the stock quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> ProductInput {
        ProductInput {
            quantity,
            ..self.to_input()
        }
    }
}

/// Create/update body for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Product name
    #[serde(rename = "nome")]
    pub name: String,

    /// Optional description
    #[serde(rename = "descricao")]
    pub description: Option<String>,

    /// Unit price
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units in stock
    #[serde(rename = "quantidade_estoque")]
    pub quantity: u32,
}

/// Catalog status badge. Only distinguishes "more than ten" from the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductBadge {
    /// More than [`LOW_STOCK_THRESHOLD`] units.
    InStock,

    /// [`LOW_STOCK_THRESHOLD`] units or fewer, including none.
    LowStock,
}

impl ProductBadge {
    /// Badge for a stock quantity.
    #[must_use]
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity > LOW_STOCK_THRESHOLD {
            Self::InStock
        } else {
            Self::LowStock
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "Em Estoque",
            Self::LowStock => "Baixo Estoque",
        }
    }

    /// Visual indicator.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::InStock => Tone::Success,
            Self::LowStock => Tone::Warning,
        }
    }
}

/// Stock level shown on the stock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// More than [`LOW_STOCK_THRESHOLD`] units.
    InStock,

    /// Between one and [`LOW_STOCK_THRESHOLD`] units.
    LowStock,

    /// No units.
    OutOfStock,
}

impl StockLevel {
    /// Level for a stock quantity.
    #[must_use]
    pub fn for_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Self::OutOfStock,
            1..=LOW_STOCK_THRESHOLD => Self::LowStock,
            _ => Self::InStock,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "Em Estoque",
            Self::LowStock => "Baixo Estoque",
            Self::OutOfStock => "Sem Estoque",
        }
    }

    /// Visual indicator.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::InStock => Tone::Success,
            Self::LowStock => Tone::Warning,
            Self::OutOfStock => Tone::Danger,
        }
    }
}

/// Product create/edit form state.
///
/// Fields hold raw user input and are only parsed on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Product being edited, `None` when creating.
    pub product: Option<ProductId>,

    /// Name field
    pub name: String,

    /// Description field
    pub description: String,

    /// Price field
    pub price: String,

    /// Stock quantity field
    pub quantity: String,
}

impl ProductForm {
    /// An empty form for a new product.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing product.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            product: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.normalize().to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    /// Whether the form edits an existing product.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.product.is_some()
    }

    /// Form title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Editar Produto"
        } else {
            "Novo Produto"
        }
    }

    /// Message shown after a successful save.
    #[must_use]
    pub fn success_message(&self) -> &'static str {
        if self.is_edit() {
            "Produto atualizado com sucesso!"
        } else {
            "Produto criado com sucesso!"
        }
    }

    /// Parse the fields into a request body.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a blank name, a malformed or negative price, or a
    /// malformed or negative quantity.
    pub fn parse(&self) -> Result<ProductInput, ValidationError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let description = self.description.trim();

        Ok(ProductInput {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price: parse_price(&self.price)?,
            quantity: parse_quantity(&self.quantity)?,
        })
    }
}
