use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the managed backend project
    pub backend_url: String,
    /// Project API key sent with every request
    pub api_key: String,
    /// Storage bucket holding post media
    pub media_bucket: String,
    /// Credentials for the demo binary
    pub demo_email: Option<String>,
    pub demo_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            backend_url: env::var("FRAMEZ_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string()),
            api_key: env::var("FRAMEZ_API_KEY").expect("FRAMEZ_API_KEY must be set"),
            media_bucket: env::var("FRAMEZ_MEDIA_BUCKET")
                .unwrap_or_else(|_| "post_media".to_string()),
            demo_email: env::var("FRAMEZ_EMAIL").ok(),
            demo_password: env::var("FRAMEZ_PASSWORD").ok(),
        }
    }
}
