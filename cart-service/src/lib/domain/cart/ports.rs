use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartItemDetail;
use crate::domain::cart::models::CartItemId;
use crate::domain::customer::models::CustomerId;
use crate::domain::product::models::ProductId;

/// Port for cart operations, scoped to the authenticated principal's email.
#[async_trait]
pub trait CartServicePort: Send + Sync + 'static {
    /// Add a product to the customer's cart.
    ///
    /// # Errors
    /// * `UnknownCustomer` - Principal email resolves to no customer
    /// * `InvalidProduct` - Product id does not exist
    /// * `DuplicateCartItem` - Product is already in the cart
    async fn add_item(&self, email: &str, product_id: ProductId)
        -> Result<CartItemId, CartError>;

    /// List the customer's cart items with product details.
    ///
    /// # Errors
    /// * `UnknownCustomer` - Principal email resolves to no customer
    async fn list_items(&self, email: &str) -> Result<Vec<CartItemDetail>, CartError>;

    /// Delete a cart item owned by the customer.
    ///
    /// # Errors
    /// * `UnknownCustomer` - Principal email resolves to no customer
    /// * `NotInCustomerCart` - Item id is not among the customer's items
    async fn delete_item(&self, email: &str, cart_item_id: CartItemId) -> Result<(), CartError>;
}

/// Persistence operations for cart items.
#[async_trait]
pub trait CartItemRepository: Send + Sync + 'static {
    /// Insert a cart item with quantity 1; storage assigns the id.
    ///
    /// The (customer, product) unique index backstops the service-level
    /// duplicate check under concurrency.
    ///
    /// # Errors
    /// * `DuplicateCartItem` - Unique (customer, product) constraint violated
    /// * `InvalidProduct` - Product foreign key violated
    async fn add(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<CartItemId, CartError>;

    /// Retrieve the customer's cart items joined with product data.
    async fn find_details_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartItemDetail>, CartError>;

    /// Retrieve the ids of the customer's cart items.
    async fn find_ids_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartItemId>, CartError>;

    /// Retrieve the product ids already in the customer's cart.
    async fn find_product_ids_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ProductId>, CartError>;

    /// Remove a cart item.
    ///
    /// # Errors
    /// * `NotInCustomerCart` - Item no longer exists
    async fn delete(&self, id: CartItemId) -> Result<(), CartError>;
}
