use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use axum::http::HeaderValue;
use chrono::DateTime;
use chrono::Utc;
use shop_service::domain::inventory::errors::InventoryError;
use shop_service::domain::inventory::models::InventoryItem;
use shop_service::domain::inventory::ports::InventoryRepository;
use shop_service::domain::inventory::service::InventoryService;
use shop_service::domain::paging::Page;
use shop_service::domain::sales::errors::SalesError;
use shop_service::domain::sales::models::PaymentMethodTotal;
use shop_service::domain::sales::models::Sale;
use shop_service::domain::sales::models::SalesTotals;
use shop_service::domain::sales::ports::SaleRepository;
use shop_service::domain::sales::service::SalesService;
use shop_service::domain::user::models::GoogleProfile;
use shop_service::domain::user::models::User;
use shop_service::domain::user::models::UserId;
use shop_service::domain::user::ports::GoogleTokenVerifier;
use shop_service::domain::user::ports::ResetMailer;
use shop_service::domain::user::ports::UserRepository;
use shop_service::domain::user::service::UserService;
use shop_service::inbound::http::router::create_router;
use shop_service::user::errors::GoogleVerifyError;
use shop_service::user::errors::MailerError;
use shop_service::user::errors::UserError;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// The Google ID token the stub verifier accepts.
pub const GOOGLE_TEST_TOKEN: &str = "good-google-token";

/// Test application that spawns a real server over in-memory adapters.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub mailer: Arc<RecordingMailer>,
    pub authenticator: Authenticator,
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

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let inventory_repository = Arc::new(InMemoryInventoryRepository::default());
        let sale_repository = Arc::new(InMemorySaleRepository::default());
        let mailer = Arc::new(RecordingMailer::default());
        let google_verifier = Arc::new(StubGoogleVerifier::default());

        let user_service = Arc::new(UserService::new(
            user_repository,
            Arc::clone(&mailer),
            google_verifier,
            Arc::new(Authenticator::new(JWT_SECRET)),
        ));
        let inventory_service = Arc::new(InventoryService::new(inventory_repository));
        let sales_service = Arc::new(SalesService::new(sale_repository));

        let allowed_origin = "http://localhost:3000"
            .parse::<HeaderValue>()
            .expect("Failed to parse CORS origin");

        let router = create_router(
            user_service,
            inventory_service,
            sales_service,
            allowed_origin,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            mailer,
            authenticator: Authenticator::new(JWT_SECRET),
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

    /// Register a user and log them in, returning the access token.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "email": email,
                "name": "Test User",
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert!(response.status().is_success(), "registration failed");

        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert!(response.status().is_success(), "login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse login");
        body["data"]["access_token"]
            .as_str()
            .expect("missing access token")
            .to_string()
    }

    /// Reset emails handed to the mailer so far.
    pub fn sent_reset_emails(&self) -> Vec<SentEmail> {
        self.mailer.sent.lock().unwrap().clone()
    }
}

/// A reset email captured by the recording mailer.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub token: String,
}

/// Mailer double that records sends and can be told to fail.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentEmail>>,
    pub fail_sends: AtomicBool,
}

#[async_trait]
impl ResetMailer for RecordingMailer {
    async fn send_reset_email(
        &self,
        to_email: &str,
        reset_token: &str,
    ) -> Result<(), MailerError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(MailerError::DeliveryFailed("relay refused".to_string()));
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to_email.to_string(),
            token: reset_token.to_string(),
        });

        Ok(())
    }
}

/// Google verifier double accepting exactly one token value.
pub struct StubGoogleVerifier {
    pub profile: GoogleProfile,
}

impl Default for StubGoogleVerifier {
    fn default() -> Self {
        Self {
            profile: GoogleProfile {
                email: "google-user@example.com".to_string(),
                name: Some("Google User".to_string()),
                picture: Some("https://example.com/avatar.png".to_string()),
            },
        }
    }
}

#[async_trait]
impl GoogleTokenVerifier for StubGoogleVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleProfile, GoogleVerifyError> {
        if id_token == GOOGLE_TEST_TOKEN {
            Ok(self.profile.clone())
        } else {
            Err(GoogleVerifyError::Rejected)
        }
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.id == *id) {
            Some(user) => {
                user.password_hash = Some(password_hash.to_string());
                Ok(())
            }
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}

#[derive(Default)]
pub struct InMemoryInventoryRepository {
    items: Mutex<Vec<InventoryItem>>,
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn list(&self, page: Page) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemorySaleRepository {
    sales: Mutex<Vec<Sale>>,
}

#[async_trait]
impl SaleRepository for InMemorySaleRepository {
    async fn create(&self, sale: Sale) -> Result<Sale, SalesError> {
        self.sales.lock().unwrap().push(sale.clone());
        Ok(sale)
    }

    async fn list(&self, page: Page) -> Result<Vec<Sale>, SalesError> {
        let sales = self.sales.lock().unwrap();
        let mut newest_first: Vec<Sale> = sales.clone();
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(newest_first
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn totals_between(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<SalesTotals, SalesError> {
        let sales = self.sales.lock().unwrap();
        let in_window: Vec<&Sale> = sales
            .iter()
            .filter(|s| s.created_at >= start_date && s.created_at <= end_date)
            .collect();

        let mut by_payment_method: Vec<PaymentMethodTotal> = Vec::new();
        for sale in &in_window {
            match by_payment_method
                .iter_mut()
                .find(|t| t.payment_method == sale.payment_method)
            {
                Some(total) => {
                    total.total += sale.amount;
                    total.count += 1;
                }
                None => by_payment_method.push(PaymentMethodTotal {
                    payment_method: sale.payment_method.clone(),
                    total: sale.amount,
                    count: 1,
                }),
            }
        }

        Ok(SalesTotals {
            total_revenue: in_window.iter().map(|s| s.amount).sum(),
            sale_count: in_window.len() as i64,
            by_payment_method,
        })
    }
}
