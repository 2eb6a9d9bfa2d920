// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product id cannot be empty")]
    EmptyId,

    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Invalid product price: {0}")]
    InvalidPrice(f64),
}
