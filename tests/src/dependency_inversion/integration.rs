#![cfg(test)]
use std::cell::Cell;
use std::rc::Rc;

use solid_core::dependency_inversion::after::{self, DbConnection};
use solid_core::dependency_inversion::{DEFAULT_DATA_SOURCE, before};

/// Counts lookups so the test can tell which connection was used.
struct RecordingConnection {
    lookups: Rc<Cell<usize>>,
}

impl DbConnection for RecordingConnection {
    fn name(&self) -> &str {
        self.lookups.set(self.lookups.get() + 1);
        "recording"
    }

    fn data_source(&self) -> &str {
        "memory://recording"
    }
}

#[test]
fn before_reminder_is_tied_to_mysql() {
    let reminder = before::PasswordReminder::new();
    assert_eq!(reminder.connection().data_source(), DEFAULT_DATA_SOURCE);

    let reminder = before::PasswordReminder::with_connection(before::MySqlConnection::new(
        "mysql://replica:3306/app",
    ));
    assert_eq!(reminder.connection().data_source(), "mysql://replica:3306/app");
}

#[test]
fn after_reminder_uses_supplied_connection() {
    let lookups = Rc::new(Cell::new(0));
    let connection: Box<dyn DbConnection> = Box::new(RecordingConnection {
        lookups: Rc::clone(&lookups),
    });
    let injected: *const dyn DbConnection = connection.as_ref();
    let reminder = after::PasswordReminder::new(connection);

    assert!(std::ptr::addr_eq(std::ptr::from_ref(reminder.connection()), injected));
    assert_eq!(lookups.get(), 0);

    let sent = reminder.remind("carol");
    assert_eq!(sent.user, "carol");
    assert_eq!(sent.connection, "recording");
    assert_eq!(sent.data_source, "memory://recording");
    assert_eq!(lookups.get(), 1);

    reminder.remind("erin");
    assert_eq!(lookups.get(), 2);
}

#[test]
fn after_reminder_with_mysql_adapter() {
    let reminder = after::PasswordReminder::new(Box::new(after::MySqlConnection::new(
        "mysql://primary:3306/app",
    )));

    assert_eq!(reminder.connection().name(), "mysql");
    assert_eq!(reminder.remind("dave").data_source, "mysql://primary:3306/app");
}
