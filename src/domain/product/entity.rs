use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::events::ProductCreatedEvent;

// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: String,
    name: String,
    description: String,
    price: f64,
}

/// Wire shape of a product; deserialization goes through `Product::new`
#[derive(Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.name, record.description, record.price)
    }
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Build a product and the event announcing it
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<(Self, ProductCreatedEvent), ProductError> {
        let product = Self::new(id, name, description, price)?;
        let event = ProductCreatedEvent::new(
            &product.id,
            &product.name,
            &product.description,
            product.price,
        );
        Ok((product, event))
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        validate_price(self.price)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}
