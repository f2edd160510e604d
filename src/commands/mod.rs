mod config_cmd;
mod list;
mod watch;

pub use config_cmd::ConfigCommand;
pub use list::ListCommand;
pub use watch::WatchCommand;

use tempview::ReadingList;

/// Renders the list the way the station dashboard does: one card per
/// reading, newest last.
pub(crate) fn print_readings(readings: &ReadingList) {
    println!("Leituras de Temperatura e Umidade");
    println!("{}", "=".repeat(33));
    println!();

    if readings.is_empty() {
        println!("No readings.");
        return;
    }

    for reading in readings {
        println!("{}", reading);
    }
}
