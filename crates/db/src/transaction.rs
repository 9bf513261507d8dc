//! Explicit commit / rollback for single-statement writes.

use sqlx::{Postgres, Transaction};

/// Commit `tx` if `result` is `Ok`, otherwise roll it back and return the
/// original error.
///
/// A rollback failure is logged; the statement error is what the caller sees.
pub async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    result: Result<T, sqlx::Error>,
) -> Result<T, sqlx::Error> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
