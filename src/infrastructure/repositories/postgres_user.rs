// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, map_user_delete};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::user::{
    Age, NewUser, PersonName, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, username, firstname, lastname, age, slug";

/// Users table access. Holds a pool handle; each statement checks out its own
/// connection and hands it back when the statement completes.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: UserUpdate) -> QueryBuilder<'static, Postgres> {
        let UserUpdate {
            id,
            firstname,
            lastname,
            age,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut first = true;

        if let Some(firstname) = firstname {
            first = false;
            builder.push("firstname = ");
            builder.push_bind(String::from(firstname));
        }

        if let Some(lastname) = lastname {
            if !first {
                builder.push(", ");
            }
            first = false;
            builder.push("lastname = ");
            builder.push_bind(String::from(lastname));
        }

        if let Some(age) = age {
            if !first {
                builder.push(", ");
            }
            builder.push("age = ");
            builder.push_bind(i32::from(age));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        builder
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    firstname: String,
    lastname: String,
    age: i32,
    slug: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            firstname: PersonName::new(row.firstname)?,
            lastname: PersonName::new(row.lastname)?,
            age: Age::new(row.age)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!("SELECT {USER_COLUMNS} FROM users"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            firstname,
            lastname,
            age,
            slug,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, firstname, lastname, age, slug)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(firstname.as_str())
        .bind(lastname.as_str())
        .bind(age.value())
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<()> {
        if update.is_empty() {
            return Err(DomainError::validation("no fields provided for update"));
        }

        let mut builder = Self::build_update_query(update);
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user was not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_user_delete)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user was not found"));
        }
        Ok(())
    }
}
