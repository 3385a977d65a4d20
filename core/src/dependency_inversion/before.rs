use tracing::debug;

use super::DEFAULT_DATA_SOURCE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySqlConnection {
    data_source: String,
}

impl MySqlConnection {
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
        }
    }

    pub fn data_source(&self) -> &str {
        &self.data_source
    }
}

impl Default for MySqlConnection {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_SOURCE)
    }
}

/// Tied to MySQL: both constructors only know about [`MySqlConnection`].
#[derive(Debug, Clone)]
pub struct PasswordReminder {
    connection: MySqlConnection,
}

impl PasswordReminder {
    /// Builds its own connection to the default data source.
    pub fn new() -> Self {
        let connection = MySqlConnection::default();
        debug!("PasswordReminder: created its own connection to {}", connection.data_source());
        Self { connection }
    }

    pub fn with_connection(connection: MySqlConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &MySqlConnection {
        &self.connection
    }
}

impl Default for PasswordReminder {
    fn default() -> Self {
        Self::new()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
