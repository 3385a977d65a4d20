use tracing::debug;

use super::DEFAULT_DATA_SOURCE;

/// Defines the contract the reminder needs from a database.
pub trait DbConnection {
    /// Short label for logs, e.g. `"mysql"`.
    fn name(&self) -> &str;

    fn data_source(&self) -> &str;
}

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
}

impl Default for MySqlConnection {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_SOURCE)
    }
}

impl DbConnection for MySqlConnection {
    fn name(&self) -> &str {
        "mysql"
    }

    fn data_source(&self) -> &str {
        &self.data_source
    }
}

/// A reminder addressed to one user, and where their record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub user: String,
    pub connection: String,
    pub data_source: String,
}

pub struct PasswordReminder {
    connection: Box<dyn DbConnection>,
}

impl PasswordReminder {
    /// Takes the connection users are looked up through.
    pub fn new(connection: Box<dyn DbConnection>) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &dyn DbConnection {
        self.connection.as_ref()
    }

    /// Looks the connection up exactly once per reminder.
    pub fn remind(&self, user: &str) -> Reminder {
        let connection = self.connection.name().to_string();
        let data_source = self.connection.data_source().to_string();
        debug!("PasswordReminder: reminding {user} via {connection} ({data_source})");

        Reminder {
            user: user.to_string(),
            connection,
            data_source,
        }
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
