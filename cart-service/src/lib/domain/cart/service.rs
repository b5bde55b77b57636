use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartItemDetail;
use crate::domain::cart::models::CartItemId;
use crate::domain::cart::ports::CartItemRepository;
use crate::domain::cart::ports::CartServicePort;
use crate::domain::customer::models::Customer;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;

/// Domain service implementation for cart operations.
///
/// Every operation starts from the principal's email: the customer record
/// is resolved fresh per call, then ownership and uniqueness checks run
/// before any write is delegated to storage.
pub struct CartService<CIR, CR, PR>
where
    CIR: CartItemRepository,
    CR: CustomerRepository,
    PR: ProductRepository,
{
    cart_item_repository: Arc<CIR>,
    customer_repository: Arc<CR>,
    product_repository: Arc<PR>,
}

impl<CIR, CR, PR> CartService<CIR, CR, PR>
where
    CIR: CartItemRepository,
    CR: CustomerRepository,
    PR: ProductRepository,
{
    pub fn new(
        cart_item_repository: Arc<CIR>,
        customer_repository: Arc<CR>,
        product_repository: Arc<PR>,
    ) -> Self {
        Self {
            cart_item_repository,
            customer_repository,
            product_repository,
        }
    }

    async fn resolve_customer(&self, email: &str) -> Result<Customer, CartError> {
        self.customer_repository
            .find_by_email(email)
            .await?
            .ok_or(CartError::UnknownCustomer)
    }
}

#[async_trait]
impl<CIR, CR, PR> CartServicePort for CartService<CIR, CR, PR>
where
    CIR: CartItemRepository,
    CR: CustomerRepository,
    PR: ProductRepository,
{
    async fn add_item(
        &self,
        email: &str,
        product_id: ProductId,
    ) -> Result<CartItemId, CartError> {
        let customer = self.resolve_customer(email).await?;

        let product = self
            .product_repository
            .find_by_id(&product_id)
            .await?
            .ok_or(CartError::InvalidProduct(product_id.0))?;

        let in_cart = self
            .cart_item_repository
            .find_product_ids_by_customer(customer.id)
            .await?;
        if in_cart.contains(&product.id) {
            return Err(CartError::DuplicateCartItem(product.id.0));
        }

        let id = self
            .cart_item_repository
            .add(customer.id, product.id)
            .await?;

        tracing::info!(customer_id = %customer.id, product_id = %product.id, "Cart item added");

        Ok(id)
    }

    async fn list_items(&self, email: &str) -> Result<Vec<CartItemDetail>, CartError> {
        let customer = self.resolve_customer(email).await?;
        self.cart_item_repository
            .find_details_by_customer(customer.id)
            .await
    }

    async fn delete_item(&self, email: &str, cart_item_id: CartItemId) -> Result<(), CartError> {
        let customer = self.resolve_customer(email).await?;

        let owned_ids = self
            .cart_item_repository
            .find_ids_by_customer(customer.id)
            .await?;
        if !owned_ids.contains(&cart_item_id) {
            return Err(CartError::NotInCustomerCart(cart_item_id.0));
        }

        self.cart_item_repository.delete(cart_item_id).await
    }
}
