//! Framez demo binary
//!
//! Signs in with the configured demo account, prints the global feed, and
//! then tails realtime inserts until interrupted.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use framez_client::adapters::{
    RestAuthGateway, RestClient, RestPostRepository, WsRealtimeGateway,
};
use framez_client::app::FeedService;
use framez_client::config::Config;
use framez_client::domain::entities::{FeedScope, Post};
use framez_client::domain::ports::AuthGateway;

fn print_post(post: &Post) {
    let author = post
        .author
        .as_ref()
        .map(|a| a.name.as_str())
        .unwrap_or("User");
    println!(
        "[{}] {} ({} likes): {}",
        post.created_at.format("%Y-%m-%d %H:%M"),
        author,
        post.like_count(),
        post.caption
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,framez_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let email = config
        .demo_email
        .clone()
        .context("FRAMEZ_EMAIL must be set for the demo")?;
    let password = config
        .demo_password
        .clone()
        .context("FRAMEZ_PASSWORD must be set for the demo")?;

    let rest = Arc::new(RestClient::new(
        config.backend_url.clone(),
        config.api_key.clone(),
    ));
    let auth = RestAuthGateway::new(Arc::clone(&rest));
    let posts = Arc::new(RestPostRepository::new(Arc::clone(&rest)));
    let realtime = Arc::new(WsRealtimeGateway::new(
        config.backend_url.clone(),
        config.api_key.clone(),
    ));

    let session = auth.sign_in(&email, &password).await?;
    tracing::info!(user = %session.user_id, "signed in");

    let mut feed = FeedService::new(posts, realtime, FeedScope::Global, session.user_id);
    feed.mount().await?;

    println!("--- feed ({} posts) ---", feed.posts().len());
    for post in feed.posts() {
        print_post(post);
    }

    println!("--- waiting for new posts (ctrl-c to quit) ---");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            applied = feed.apply_next_insert() => {
                match applied {
                    Some(post) => print_post(&post),
                    None => {
                        tracing::warn!("realtime channel closed");
                        break;
                    }
                }
            }
        }
    }

    feed.unmount();
    auth.sign_out().await.ok();
    Ok(())
}
