use async_trait::async_trait;
use sqlx::{
    postgres::{PgExecutor, PgPoolOptions},
    PgConnection, PgPool,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    error::{PersistenceError, PersistenceResult},
    models::Contact,
};

pub async fn establish_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Storage operations the contact handler depends on.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Point-in-time read outside any transaction.
    async fn contact_exists(&self, contact_id: Uuid) -> PersistenceResult<bool>;

    /// Upserts the contact row and all of its phone rows in one transaction.
    /// Returns the number of phone rows written.
    async fn save_contact(&self, contact: &Contact) -> PersistenceResult<u64>;
}

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactStore {
    async fn contact_exists(&self, contact_id: Uuid) -> PersistenceResult<bool> {
        Ok(contact_exists(&self.pool, contact_id).await?)
    }

    async fn save_contact(&self, contact: &Contact) -> PersistenceResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Error starting transaction: {}", e);
            PersistenceError::from(e)
        })?;

        match write_contact(&mut *tx, contact).await {
            Ok(phone_rows) => {
                info!("Committing changes for contact {}", contact.id);
                tx.commit().await?;
                Ok(phone_rows)
            }
            Err(cause) => {
                info!("Rolling back changes for contact {}", contact.id);
                match tx.rollback().await {
                    Ok(()) => Err(cause),
                    Err(source) => Err(PersistenceError::Rollback {
                        source,
                        cause: Box::new(cause),
                    }),
                }
            }
        }
    }
}

async fn contact_exists<'e, E>(executor: E, contact_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM contact WHERE contact_id = $1)")
        .bind(contact_id)
        .fetch_one(executor)
        .await
}

async fn write_contact(conn: &mut PgConnection, contact: &Contact) -> PersistenceResult<u64> {
    // Re-checked on the transaction's connection; may disagree with the
    // caller's earlier read if another writer got in between.
    let statement = if contact_exists(&mut *conn, contact.id).await? {
        "UPDATE contact SET name = $1, email = $2 WHERE contact_id = $3"
    } else {
        "INSERT INTO contact (name, email, contact_id) VALUES ($1, $2, $3)"
    };

    let affected = sqlx::query(statement)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(contact.id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("Error saving contact record: {}", e);
            PersistenceError::from(e)
        })?
        .rows_affected();
    if affected != 1 {
        error!("Error saving contact record: {} rows affected", affected);
        return Err(PersistenceError::RecordCountMismatch {
            expected: 1,
            actual: affected,
        });
    }
    info!("Contact record saved successfully");

    let phone_rows = upsert_phone_numbers(conn, contact).await.map_err(|e| {
        error!("Error in phone number upsert: {}", e);
        e
    })?;
    info!("Updated {} contact phone numbers successfully", phone_rows);

    Ok(phone_rows)
}

async fn upsert_phone_numbers(conn: &mut PgConnection, contact: &Contact) -> PersistenceResult<u64> {
    let mut total = 0;
    for (phone_type, number) in contact.numbers.iter() {
        let phone_type = phone_type.to_string();

        let existing: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM contact_phone WHERE contact_id = $1 AND contact_phone_type = $2",
        )
        .bind(contact.id)
        .bind(&phone_type)
        .fetch_one(&mut *conn)
        .await?;

        let statement = if existing == 0 {
            "INSERT INTO contact_phone (number, contact_id, contact_phone_type) VALUES ($1, $2, $3)"
        } else {
            "UPDATE contact_phone SET number = $1 WHERE contact_id = $2 AND contact_phone_type = $3"
        };

        total += sqlx::query(statement)
            .bind(number)
            .bind(contact.id)
            .bind(&phone_type)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }
    Ok(total)
}
