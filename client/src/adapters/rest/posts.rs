//! Post repository over the backend's REST surface
//!
//! Queries the `posts` table joined with `profiles` and `likes`; like
//! toggles insert or delete rows in `likes` directly.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::RestClient;
use crate::domain::entities::{
    AuthorDisplay, FeedScope, NewPost, Post, PostId, PostMedia, UserId,
};
use crate::domain::ports::PostRepository;
use crate::error::{BackendError, DomainError};

const POSTS_SELECT: &str = "*,profiles(name,avatar_url),likes(user_id)";

pub struct RestPostRepository {
    rest: Arc<RestClient>,
}

impl RestPostRepository {
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }
}

/// Row shape of the joined posts query
#[derive(Deserialize)]
struct PostRow {
    id: PostId,
    user_id: UserId,
    content: String,
    image_url: Option<String>,
    video_url: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    profiles: Option<AuthorRow>,
    #[serde(default)]
    likes: Vec<LikeRow>,
}

#[derive(Deserialize)]
struct AuthorRow {
    name: String,
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct LikeRow {
    user_id: UserId,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            author_id: row.user_id,
            caption: row.content,
            media: PostMedia::from_columns(row.image_url, row.video_url),
            created_at: row.created_at,
            liked_by: row.likes.into_iter().map(|l| l.user_id).collect(),
            author: row.profiles.map(|p| AuthorDisplay {
                name: p.name,
                avatar_url: p.avatar_url,
            }),
        }
    }
}

#[derive(Serialize)]
struct InsertPostRequest<'a> {
    user_id: UserId,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<&'a str>,
}

#[derive(Serialize)]
struct InsertLikeRequest {
    post_id: PostId,
    user_id: UserId,
}

#[async_trait]
impl PostRepository for RestPostRepository {
    async fn query(&self, scope: FeedScope) -> Result<Vec<Post>, DomainError> {
        let mut request = self
            .rest
            .http()
            .get(self.rest.rest_url("/posts"))
            .query(&[("select", POSTS_SELECT), ("order", "created_at.desc")]);
        if let Some(author) = scope.author() {
            request = request.query(&[("user_id", format!("eq.{author}"))]);
        }

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        let rows: Vec<PostRow> = self.rest.handle_response(response).await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn create(&self, author: UserId, post: &NewPost) -> Result<Post, DomainError> {
        let body = InsertPostRequest {
            user_id: author,
            content: &post.caption,
            image_url: post.media.image_url(),
            video_url: post.media.video_url(),
        };
        let request = self
            .rest
            .http()
            .post(self.rest.rest_url("/posts"))
            .header("Prefer", "return=representation")
            .query(&[("select", POSTS_SELECT)])
            .json(&body);

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        // the backend returns an array even for single-row inserts
        let mut rows: Vec<PostRow> = self.rest.handle_response(response).await?;
        let row = rows
            .pop()
            .ok_or_else(|| DomainError::Backend("insert returned no rows".to_string()))?;
        Ok(row.into())
    }

    async fn set_liked(
        &self,
        post: PostId,
        viewer: UserId,
        liked: bool,
    ) -> Result<(), DomainError> {
        let request = if liked {
            self.rest
                .http()
                .post(self.rest.rest_url("/likes"))
                .json(&InsertLikeRequest {
                    post_id: post,
                    user_id: viewer,
                })
        } else {
            self.rest
                .http()
                .delete(self.rest.rest_url("/likes"))
                .query(&[
                    ("post_id", format!("eq.{post}")),
                    ("user_id", format!("eq.{viewer}")),
                ])
        };

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        self.rest.handle_empty_response(response).await?;
        Ok(())
    }
}
