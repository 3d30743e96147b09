//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::{
    BadWordRepository, UserRepository, downvote::DownvoteRepository, media::MediaRepository,
    post::PostRepository,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub post_repository: PostRepository,
    pub media_repository: MediaRepository,
    pub downvote_repository: DownvoteRepository,
    pub bad_word_repository: BadWordRepository,
}
