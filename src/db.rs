use std::future::Future;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::query_dsl::methods::ExecuteDsl;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::result::{Error as DieselError, QueryResult};
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use tracing::{debug, warn};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// How many times a write is retried when SQLite reports a lock
const MAX_WRITE_RETRIES: u32 = 5;

/// Base delay between write retries, multiplied by the attempt number
const WRITE_RETRY_BACKOFF: Duration = Duration::from_millis(20);

/// Applies the per-connection pragmas every pooled connection needs
///
/// SQLite only enforces foreign keys when asked to, and the setting does not
/// persist in the database file, so it has to be set on each new connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Creates a connection pool for the given SQLite database URL
///
/// ### Arguments
///
/// * `database_url` - A file path, `:memory:`, or a `file:` URI
///
/// ### Errors
///
/// Returns an error if the pool cannot open its initial connections
pub fn init_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}

/// Executes a write statement, retrying while the database is locked
///
/// Concurrent writers on the same SQLite file (or the same shared-cache
/// in-memory database) fail fast with a "locked" error instead of waiting.
/// Those statements are re-run with a short async backoff; every other
/// error is returned immediately.
pub trait ExecuteWithRetry {
    fn execute_with_retry(
        self,
        conn: &mut SqliteConnection,
    ) -> impl Future<Output = QueryResult<usize>> + Send;
}

impl<T> ExecuteWithRetry for T
where
    T: RunQueryDsl<SqliteConnection> + ExecuteDsl<SqliteConnection> + Clone + Send,
{
    fn execute_with_retry(
        self,
        conn: &mut SqliteConnection,
    ) -> impl Future<Output = QueryResult<usize>> + Send {
        async move {
            let mut attempt = 0;
            loop {
                match self.clone().execute(conn) {
                    Err(err) if is_locked(&err) && attempt < MAX_WRITE_RETRIES => {
                        attempt += 1;
                        warn!("Database locked, retrying write (attempt {})", attempt);
                        tokio::time::sleep(WRITE_RETRY_BACKOFF * attempt).await;
                    }
                    result => {
                        if attempt > 0 {
                            debug!("Write finished after {} retries", attempt);
                        }
                        return result;
                    }
                }
            }
        }
    }
}

/// Whether a diesel error is SQLite's "database is locked" / "table is locked"
fn is_locked(err: &DieselError) -> bool {
    match err {
        DieselError::DatabaseError(_, info) => info.message().contains("locked"),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
