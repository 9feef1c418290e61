//! Post composition
//!
//! Validates a draft, pushes any attached media to storage, and creates the
//! post through the repository.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{MediaKind, NewPost, Post, PostMedia, UserId};
use crate::domain::ports::{MediaStore, PostRepository};
use crate::error::ClientError;

/// Raw media picked for a draft post
#[derive(Debug, Clone)]
pub struct MediaAttachment {
    pub bytes: Vec<u8>,
    pub kind: MediaKind,
}

/// Creates posts on behalf of the signed-in user
pub struct Composer<P, M>
where
    P: PostRepository,
    M: MediaStore,
{
    posts: Arc<P>,
    media: Arc<M>,
}

impl<P, M> Composer<P, M>
where
    P: PostRepository,
    M: MediaStore,
{
    pub fn new(posts: Arc<P>, media: Arc<M>) -> Self {
        Self { posts, media }
    }

    /// Create a post, uploading the attachment first when present
    ///
    /// A draft needs a caption or an attachment; a blank draft is rejected
    /// before any upload happens. Media is stored under the author's id with
    /// a millisecond timestamp so names never collide for one user.
    pub async fn create_post(
        &self,
        author: UserId,
        caption: &str,
        attachment: Option<MediaAttachment>,
    ) -> Result<Post, ClientError> {
        let caption = caption.trim();
        if caption.is_empty() && attachment.is_none() {
            return Err(ClientError::InvalidInput(
                "write something or attach media".to_string(),
            ));
        }

        let media = match attachment {
            Some(attachment) => {
                let path = format!(
                    "{}/{}{}",
                    author,
                    Utc::now().timestamp_millis(),
                    attachment.kind.extension()
                );
                let url = self
                    .media
                    .upload(&path, attachment.bytes, attachment.kind.content_type())
                    .await?;
                match attachment.kind {
                    MediaKind::Image => PostMedia::Image(url),
                    MediaKind::Video => PostMedia::Video(url),
                }
            }
            None => PostMedia::None,
        };

        let post = self
            .posts
            .create(
                author,
                &NewPost {
                    caption: caption.to_string(),
                    media,
                },
            )
            .await?;

        tracing::debug!(post = %post.id, "post created");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_viewer, InMemoryMediaStore, InMemoryPostRepository};

    fn composer(
        posts: Arc<InMemoryPostRepository>,
        media: Arc<InMemoryMediaStore>,
    ) -> Composer<InMemoryPostRepository, InMemoryMediaStore> {
        Composer::new(posts, media)
    }

    #[tokio::test]
    async fn text_only_post_has_no_media() {
        let posts = Arc::new(InMemoryPostRepository::new());
        let media = Arc::new(InMemoryMediaStore::new());
        let composer = composer(Arc::clone(&posts), Arc::clone(&media));

        let post = composer
            .create_post(test_viewer(), "  hello world  ", None)
            .await
            .unwrap();

        assert_eq!(post.caption, "hello world");
        assert!(post.media.is_none());
        assert!(media.uploads().is_empty());
    }

    #[tokio::test]
    async fn image_attachment_is_uploaded_and_linked() {
        let author = test_viewer();
        let posts = Arc::new(InMemoryPostRepository::new());
        let media = Arc::new(InMemoryMediaStore::new());
        let composer = composer(Arc::clone(&posts), Arc::clone(&media));

        let post = composer
            .create_post(
                author,
                "check this out",
                Some(MediaAttachment {
                    bytes: vec![0xff, 0xd8, 0xff],
                    kind: MediaKind::Image,
                }),
            )
            .await
            .unwrap();

        let uploads = media.uploads();
        assert_eq!(uploads.len(), 1);
        let (path, size, content_type) = &uploads[0];
        assert!(path.starts_with(&author.to_string()));
        assert!(path.ends_with(".jpg"));
        assert_eq!(*size, 3);
        assert_eq!(content_type, "image/jpeg");

        assert_eq!(post.media.image_url(), Some(format!("https://storage.test/{path}").as_str()));
    }

    #[tokio::test]
    async fn video_attachment_keeps_its_kind() {
        let composer = composer(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryMediaStore::new()),
        );

        let post = composer
            .create_post(
                test_viewer(),
                "",
                Some(MediaAttachment {
                    bytes: vec![0x00; 16],
                    kind: MediaKind::Video,
                }),
            )
            .await
            .unwrap();

        assert!(post.media.video_url().is_some());
        assert!(post.media.image_url().is_none());
    }

    #[tokio::test]
    async fn blank_draft_is_rejected_before_upload() {
        let media = Arc::new(InMemoryMediaStore::new());
        let composer = composer(Arc::new(InMemoryPostRepository::new()), Arc::clone(&media));

        let result = composer.create_post(test_viewer(), "   ", None).await;
        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
        assert!(media.uploads().is_empty());
    }
}
