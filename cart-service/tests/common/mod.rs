use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenCodec;
use cart_service::domain::auth::service::AuthService;
use cart_service::domain::cart::errors::CartError;
use cart_service::domain::cart::models::CartItemDetail;
use cart_service::domain::cart::models::CartItemId;
use cart_service::domain::cart::ports::CartItemRepository;
use cart_service::domain::cart::service::CartService;
use cart_service::domain::customer::errors::CustomerError;
use cart_service::domain::customer::models::Customer;
use cart_service::domain::customer::models::CustomerId;
use cart_service::domain::customer::models::NewCustomer;
use cart_service::domain::customer::ports::CustomerRepository;
use cart_service::domain::customer::service::CustomerService;
use cart_service::domain::product::errors::ProductError;
use cart_service::domain::product::models::NewProduct;
use cart_service::domain::product::models::Product;
use cart_service::domain::product::models::ProductId;
use cart_service::domain::product::ports::ProductRepository;
use cart_service::domain::product::service::ProductService;
use cart_service::inbound::http::router::create_router;
use cart_service::inbound::http::router::AppState;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let customer_repository = Arc::new(InMemoryCustomerRepository::new());
        let product_repository = Arc::new(InMemoryProductRepository::new());
        let cart_item_repository = Arc::new(InMemoryCartItemRepository::new(Arc::clone(
            &product_repository,
        )));

        let token_codec = Arc::new(TokenCodec::new(
            TEST_JWT_SECRET,
            chrono::Duration::hours(24),
        ));

        let state = AppState {
            customer_service: Arc::new(CustomerService::new(Arc::clone(&customer_repository))),
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&customer_repository),
                Arc::clone(&token_codec),
            )),
            product_service: Arc::new(ProductService::new(Arc::clone(&product_repository))),
            cart_service: Arc::new(CartService::new(
                cart_item_repository,
                customer_repository,
                product_repository,
            )),
            token_codec,
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(TEST_JWT_SECRET, chrono::Duration::hours(24)),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register a customer and return the login token
    pub async fn register_and_login(&self, email: &str, password: &str, nickname: &str) -> String {
        let response = self
            .post("/users")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "nickname": nickname
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["accessToken"].as_str().unwrap().to_string()
    }

    /// Add a product and return its assigned id
    pub async fn add_product(&self, name: &str, price: i32, image_url: &str) -> i64 {
        let response = self
            .post("/products")
            .json(&serde_json::json!({
                "name": name,
                "price": price,
                "imageUrl": image_url
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().unwrap()
    }
}

/// Customer storage backed by a Vec, enforcing the unique email constraint
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError> {
        let mut customers = self.customers.lock().unwrap();

        if customers
            .iter()
            .any(|c| c.email.as_str() == customer.email.as_str())
        {
            return Err(CustomerError::EmailAlreadyExists(
                customer.email.as_str().to_string(),
            ));
        }

        let created = Customer {
            id: CustomerId(customers.len() as i64 + 1),
            email: customer.email,
            password_hash: customer.password_hash,
            nickname: customer.nickname,
        };
        customers.push(created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.email.as_str() == email).cloned())
    }
}

/// Product storage backed by a Vec
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    next_id: Mutex<i64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: NewProduct) -> Result<ProductId, ProductError> {
        let mut next_id = self.next_id.lock().unwrap();
        let id = ProductId(*next_id);
        *next_id += 1;

        self.products.lock().unwrap().push(Product {
            id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
        });

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != *id);
        if products.len() == before {
            return Err(ProductError::NotFound(id.0));
        }
        Ok(())
    }
}

/// One stored cart row, mirroring the cart_items table
#[derive(Debug, Clone)]
struct StoredCartItem {
    id: CartItemId,
    customer_id: CustomerId,
    product_id: ProductId,
    quantity: i32,
}

/// Cart item storage backed by a Vec, enforcing the unique (customer,
/// product) constraint and the product foreign key
pub struct InMemoryCartItemRepository {
    items: Mutex<Vec<StoredCartItem>>,
    next_id: Mutex<i64>,
    products: Arc<InMemoryProductRepository>,
}

impl InMemoryCartItemRepository {
    pub fn new(products: Arc<InMemoryProductRepository>) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            products,
        }
    }
}

#[async_trait]
impl CartItemRepository for InMemoryCartItemRepository {
    async fn add(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<CartItemId, CartError> {
        if self
            .products
            .find_by_id(&product_id)
            .await
            .map_err(CartError::from)?
            .is_none()
        {
            return Err(CartError::InvalidProduct(product_id.0));
        }

        let mut items = self.items.lock().unwrap();
        if items
            .iter()
            .any(|i| i.customer_id == customer_id && i.product_id == product_id)
        {
            return Err(CartError::DuplicateCartItem(product_id.0));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = CartItemId(*next_id);
        *next_id += 1;

        items.push(StoredCartItem {
            id,
            customer_id,
            product_id,
            quantity: 1,
        });

        Ok(id)
    }

    async fn find_details_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartItemDetail>, CartError> {
        let items: Vec<StoredCartItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.customer_id == customer_id)
            .cloned()
            .collect();

        let mut details = Vec::with_capacity(items.len());
        for item in items {
            let product = self
                .products
                .find_by_id(&item.product_id)
                .await
                .map_err(CartError::from)?
                .ok_or(CartError::InvalidProduct(item.product_id.0))?;
            details.push(CartItemDetail {
                id: item.id,
                name: product.name,
                price: product.price,
                image_url: product.image_url,
                quantity: item.quantity,
            });
        }

        Ok(details)
    }

    async fn find_ids_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartItemId>, CartError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.customer_id == customer_id)
            .map(|i| i.id)
            .collect())
    }

    async fn find_product_ids_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ProductId>, CartError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.customer_id == customer_id)
            .map(|i| i.product_id)
            .collect())
    }

    async fn delete(&self, id: CartItemId) -> Result<(), CartError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(CartError::NotInCustomerCart(id.0));
        }
        Ok(())
    }
}
