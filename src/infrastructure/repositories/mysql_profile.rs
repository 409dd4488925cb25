// src/infrastructure/repositories/mysql_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{Bio, ProfilePicture, ProfileRepository, UserProfile, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};

/// `ProfileRepository` over the `users` table. Every call checks a
/// connection out of the pool for the duration of one statement.
#[derive(Clone)]
pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    username: String,
    bio: String,
    profile_picture: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

fn corrupt_row(err: DomainError) -> DomainError {
    DomainError::Persistence(format!("stored profile is invalid: {err}"))
}

/// A row that fails value-object validation is a server-side fault, never a
/// client one.
impl TryFrom<ProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            username: Username::new(row.username).map_err(corrupt_row)?,
            bio: Bio::new(row.bio).map_err(corrupt_row)?,
            profile_picture: ProfilePicture::new(row.profile_picture).map_err(corrupt_row)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT username, bio, profile_picture, created_at, updated_at, deleted_at
             FROM users
             WHERE username = ? AND deleted_at IS NULL
             LIMIT 1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserProfile::try_from).transpose()
    }

    async fn save(&self, profile: &UserProfile) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO users (username, bio, profile_picture, created_at, updated_at, deleted_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON DUPLICATE KEY UPDATE
                bio = VALUES(bio),
                profile_picture = VALUES(profile_picture),
                updated_at = VALUES(updated_at),
                deleted_at = VALUES(deleted_at)",
        )
        .bind(profile.username.as_str())
        .bind(profile.bio.as_str())
        .bind(profile.profile_picture.as_str())
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .bind(profile.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}
