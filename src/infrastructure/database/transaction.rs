//! Scoped transactions
//!
//! [`run_in_transaction`] begins a transaction, hands it to a closure and
//! commits on `Ok` or rolls back on `Err`. If the closure panics the
//! `DatabaseTransaction` is dropped uncommitted, which rolls it back. In every
//! case the underlying pooled connection is released when the handle goes out
//! of scope.

use futures_util::future::BoxFuture;
use log::warn;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Run `work` inside a single database transaction.
///
/// ```ignore
/// let id = run_in_transaction(&db, move |txn| {
///     Box::pin(async move {
///         product.insert(txn).await?;
///         Ok(id)
///     })
/// })
/// .await?;
/// ```
pub async fn run_in_transaction<T, F>(db: &DatabaseConnection, work: F) -> Result<T, DbErr>
where
    T: Send,
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<T, DbErr>> + Send,
{
    let txn = db.begin().await?;

    match work(&txn).await {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}
