//! Transaction lifecycle helper.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Boxed future tied to the borrow of the transaction it runs against.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, DomainError>> + Send + 'a>>;

/// Execute a function within a database transaction.
///
/// Begins a transaction, runs the closure, commits on `Ok` and rolls back on
/// `Err` (best-effort; the original error is preserved).
///
/// ```ignore
/// let user = with_txn(&db, |txn| {
///     Box::pin(async move { users::create_user(txn, "Ada", "ada@example.test").await })
/// })
/// .await?;
/// ```
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let txn = db.begin().await.map_err(map_db_err)?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await.map_err(map_db_err)?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
