use solid_common::config::Config;
use solid_core::dependency_inversion::after::{self, DbConnection};
use solid_core::dependency_inversion::before;

use crate::terminal::print;

const USER: &str = "admin";

pub fn dependency_inversion(data_source: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    print::header("dependency inversion: before", cfg);

    let built_in = before::PasswordReminder::new();
    print::aligned_line("built its own", built_in.connection().data_source(), cfg);

    if let Some(data_source) = &data_source {
        let given = before::PasswordReminder::with_connection(before::MySqlConnection::new(
            data_source.as_str(),
        ));
        print::aligned_line("given MySQL only", given.connection().data_source(), cfg);
    }

    crate::sprint!();
    print::header("dependency inversion: after", cfg);

    let connection: Box<dyn DbConnection> = match data_source {
        Some(data_source) => Box::new(after::MySqlConnection::new(data_source)),
        None => Box::new(after::MySqlConnection::default()),
    };
    let reminder = after::PasswordReminder::new(connection);
    let sent = reminder.remind(USER);

    print::aligned_line("injected connection", reminder.connection().name(), cfg);
    print::aligned_line("reminder sent to", sent.user.as_str(), cfg);
    print::aligned_line("looked up through", sent.data_source.as_str(), cfg);

    print::summary(&format!(
        "reminder for {} sent via {}",
        sent.user, sent.connection
    ));
    Ok(())
}
