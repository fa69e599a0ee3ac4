//! Connection manager for the database session lifecycle.
//!
//! Owns at most one open session, loading connection settings from the
//! configuration file on connect. Connect failures are logged and reported
//! as an absent session rather than an error; query failures are logged and
//! propagated to the caller. This asymmetry is intentional: a missing
//! connection is a best-effort condition the caller checks for, while a
//! failed query is actionable.

use std::future::Future;
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::db::{self, DatabaseClient, QueryResult, Value};
use crate::error::Result;

/// An open database session.
///
/// Owned exclusively by a [`ConnectionManager`]; consumed when the manager
/// disconnects, so a closed session can never be reused.
pub struct Session {
    client: Box<dyn DatabaseClient>,
}

impl Session {
    fn new(client: Box<dyn DatabaseClient>) -> Self {
        Self { client }
    }

    /// Executes a query with optional bound positional parameters.
    ///
    /// Failures are logged at error level and propagated.
    pub async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        match self.client.execute_query(sql, params).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Query failed: {e}");
                Err(e)
            }
        }
    }

    async fn close(self) -> Result<()> {
        self.client.close().await
    }
}

/// Manages the lifecycle of a single database session.
///
/// One manager owns at most one session at a time and must not be shared
/// across concurrent callers.
pub struct ConnectionManager {
    config_path: PathBuf,
    active: Option<Session>,
}

impl ConnectionManager {
    /// Creates a new connection manager reading settings from the given
    /// config file.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            active: None,
        }
    }

    /// Creates a connection manager with an already-open client.
    ///
    /// This is primarily useful for testing with mock clients.
    pub fn with_client(config_path: impl Into<PathBuf>, client: Box<dyn DatabaseClient>) -> Self {
        Self {
            config_path: config_path.into(),
            active: Some(Session::new(client)),
        }
    }

    /// Opens a database session using the configured settings.
    ///
    /// On any failure (unreadable config, missing section, engine error)
    /// the error is logged and `None` is returned; this method never
    /// propagates the underlying error. Callers must check for `None`
    /// before issuing queries. If a session is already open it is returned
    /// as-is.
    pub async fn connect(&mut self) -> Option<&Session> {
        if self.active.is_none() {
            match self.open_session().await {
                Ok(session) => {
                    info!("Successfully connected to the database");
                    self.active = Some(session);
                }
                Err(e) => {
                    error!("Failed to connect to the database: {e}");
                    return None;
                }
            }
        }
        self.active.as_ref()
    }

    async fn open_session(&self) -> Result<Session> {
        let config = Config::load_from_file(&self.config_path)?;
        let mysql = config.mysql(&self.config_path)?;
        let client = db::connect(mysql).await?;
        Ok(Session::new(client))
    }

    /// Returns the active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    /// Returns true if a session is currently open.
    pub fn is_connected(&self) -> bool {
        self.active.is_some()
    }

    /// Closes the active session.
    ///
    /// Idempotent: safe to call repeatedly or when nothing is open.
    pub async fn disconnect(&mut self) {
        if let Some(session) = self.active.take() {
            if let Err(e) = session.close().await {
                warn!("Error while closing connection: {e}");
            }
            info!("Connection closed");
        }
    }

    /// Runs an operation against a freshly acquired session, guaranteeing
    /// release on every exit path.
    ///
    /// Returns `None` when no session could be obtained. Otherwise the
    /// session is handed to `op` by value and taken back afterwards, the
    /// manager disconnects, and the operation's outcome is returned as-is.
    pub async fn with_session<T, F, Fut>(&mut self, op: F) -> Option<Result<T>>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = (Session, Result<T>)>,
    {
        self.connect().await?;
        let session = self.active.take()?;

        let (session, outcome) = op(session).await;

        self.active = Some(session);
        self.disconnect().await;

        Some(outcome)
    }
}
