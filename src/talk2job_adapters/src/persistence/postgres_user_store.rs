use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres, Row};
use talk2job_core::{Email, User, UserId, UserStore, UserStoreError};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, name, email)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.name().as_str())
        .bind(user.email().as_ref().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, name, email
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        parse_user_row(&row)
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, name, email
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_str());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        parse_user_row(&row)
    }
}

fn parse_user_row(row: &sqlx::postgres::PgRow) -> Result<User, UserStoreError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    User::parse(id, name, Secret::from(email))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
}
