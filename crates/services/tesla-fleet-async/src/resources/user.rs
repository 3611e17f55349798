use crate::{client::Client, error::TeslaError, payload::Payload};

/// API resource for `/api/1/users/*`
pub struct User<'c> {
    client: &'c Client,
}

impl<'c> User<'c> {
    /// Creates a new User resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, path: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client.get(path, &ctx).await
    }

    /// Account summary (id, email, name, profile image, referral code)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn me(&self, token: &str) -> Result<Payload, TeslaError> {
        self.fetch("/api/1/users/me", token).await
    }

    /// Feature flags applied to the user
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn feature_config(&self, token: &str) -> Result<Payload, TeslaError> {
        self.fetch("/api/1/users/feature_config", token).await
    }

    /// The user's region and matching Fleet API base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn region(&self, token: &str) -> Result<Payload, TeslaError> {
        self.fetch("/api/1/users/region", token).await
    }

    /// Active orders
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn orders(&self, token: &str) -> Result<Payload, TeslaError> {
        self.fetch("/api/1/users/orders", token).await
    }
}

impl crate::Client {
    /// Returns the User API resource
    #[must_use]
    pub const fn user(&self) -> User<'_> {
        User::new(self)
    }
}
