use crate::log_info;
use crate::shared::errors::AppError;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// PRAGMAs applied to every pooled connection. SQLite serializes writers, so
/// a busy timeout keeps concurrent callers from seeing spurious lock errors.
#[derive(Debug)]
struct ConnectionOptions;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open the store at the path named by `DATABASE_URL`.
    ///
    /// A failure here (bad path, failed migration) is unrecoverable: no later
    /// operation can succeed, so callers should abort startup on `Err`.
    pub fn new() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;
        Self::open(&database_url)
    }

    /// Open (creating if necessary) the store at an explicit path and run any
    /// pending migrations.
    pub fn open(database_url: &str) -> Result<Self, AppError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            // Single-writer embedded store; a handful of connections is plenty.
            .max_size(4)
            .connection_timeout(Duration::from_secs(10))
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        let db = Self { pool };
        db.run_migrations()?;

        log_info!("Collectible store initialized at {}", database_url);
        Ok(db)
    }

    /// Private in-memory store, isolated per instance (useful for testing).
    ///
    /// The pool is capped at a single connection because every SQLite
    /// `:memory:` connection owns a separate database.
    pub fn in_memory() -> Result<Self, AppError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");

        let pool = r2d2::Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        let db = Self { pool };
        db.run_migrations()?;
        Ok(db)
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        self.pool.get().map_err(AppError::from)
    }

    /// Get the underlying connection pool (useful for testing and repository
    /// initialization)
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?;
        Ok(())
    }
}
