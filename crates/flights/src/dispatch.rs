//! Command dispatch.
//!
//! Resolves the data file, loads the store, runs exactly one operation and
//! saves the store back.

use std::io::Write;

use tracing::{debug, info};

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::storage::{FlightStore, SaveOutcome};
use crate::table;

/// Execute `command`, writing any table output to `out`.
///
/// The store is saved after `add`, and after `display` and `select` unless
/// `storage.save_after_read` is disabled.
///
/// # Errors
///
/// Returns an error if the data path cannot be resolved, the store cannot be
/// loaded or saved, or writing to `out` fails.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let path = config.resolve_data_path(command.filename())?;
    debug!("Using data file {}", path.display());

    let mut store = FlightStore::open(&path, config.storage.strict_format)?;

    match command {
        Command::Add(cmd) => {
            store.add(
                cmd.destination.as_str(),
                cmd.departure_date,
                cmd.aircraft_type.as_str(),
            );
        }
        Command::Display(_) => {
            out.write_all(table::render(store.list_all()).as_bytes())?;
        }
        Command::Select(cmd) => {
            let selected = store.select(cmd.date);
            debug!("Selected {} of {} flights", selected.len(), store.len());
            out.write_all(table::render(selected).as_bytes())?;
        }
    }

    if command.is_read_only() && !config.storage.save_after_read {
        return Ok(());
    }

    if let SaveOutcome::Written(format) = store.persist()? {
        info!(
            "Stored {} flights in {} ({format})",
            store.len(),
            store.path().display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::cli::{AddCommand, DisplayCommand, SelectCommand};
    use crate::flight::Flight;
    use crate::logging::init_test_logging;

    fn test_config(dir: &TempDir) -> Config {
        init_test_logging();
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        config
    }

    fn add(filename: &str, destination: &str, date: i64, aircraft: &str) -> Command {
        Command::Add(AddCommand {
            filename: PathBuf::from(filename),
            destination: destination.to_string(),
            departure_date: date,
            aircraft_type: aircraft.to_string(),
        })
    }

    fn display(filename: &str) -> Command {
        Command::Display(DisplayCommand {
            filename: PathBuf::from(filename),
        })
    }

    fn select(filename: &str, date: i64) -> Command {
        Command::Select(SelectCommand {
            filename: PathBuf::from(filename),
            date,
        })
    }

    fn run_to_string(command: &Command, config: &Config) -> String {
        let mut out = Vec::new();
        run(command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn data_row(line: &str) -> Vec<&str> {
        line.trim_matches('|').split('|').map(str::trim).collect()
    }

    #[test]
    fn test_add_then_display_json() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let output = run_to_string(&add("flights.json", "Paris", 20_240_601, "A320"), &config);
        assert!(output.is_empty());
        assert!(dir.path().join("flights.json").exists());

        let output = run_to_string(&display("flights.json"), &config);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(data_row(lines[3]), vec!["1", "Paris", "20240601", "A320"]);
    }

    #[test]
    fn test_add_then_display_xml() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("flights.xml", "Oslo", 20_240_602, "B737"), &config);
        let saved = std::fs::read_to_string(dir.path().join("flights.xml")).unwrap();
        assert!(saved.starts_with("<?xml"));

        let output = run_to_string(&display("flights.xml"), &config);
        assert!(output.contains("|    1 | Oslo"));
    }

    #[test]
    fn test_add_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("flights.json", "Paris", 20_240_601, "A320"), &config);
        run_to_string(&add("flights.json", "Oslo", 20_240_602, "B737"), &config);

        let store = FlightStore::open(dir.path().join("flights.json"), false).unwrap();
        assert_eq!(
            store.list_all(),
            &[
                Flight::new("Paris", 20_240_601, "A320"),
                Flight::new("Oslo", 20_240_602, "B737"),
            ]
        );
    }

    #[test]
    fn test_display_empty() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let output = run_to_string(&display("flights.json"), &config);
        assert_eq!(output, "No flights found.\n");
        // the empty store is still written back
        assert_eq!(
            std::fs::read_to_string(dir.path().join("flights.json")).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_select_renumbers_from_one() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("flights.json", "Oslo", 20_240_602, "B737"), &config);
        run_to_string(&add("flights.json", "Paris", 20_240_601, "A320"), &config);

        let output = run_to_string(&select("flights.json", 20_240_601), &config);
        let rows: Vec<&str> = output.lines().filter(|l| l.starts_with("|    ")).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(data_row(rows[0]), vec!["1", "Paris", "20240601", "A320"]);
    }

    #[test]
    fn test_select_no_match() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("flights.json", "Oslo", 20_240_602, "B737"), &config);
        let output = run_to_string(&select("flights.json", 19_700_101), &config);
        assert_eq!(output, "No flights found.\n");
    }

    #[test]
    fn test_select_does_not_modify_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("flights.json", "Oslo", 20_240_602, "B737"), &config);
        let before = std::fs::read_to_string(dir.path().join("flights.json")).unwrap();
        run_to_string(&select("flights.json", 20_240_602), &config);
        let after = std::fs::read_to_string(dir.path().join("flights.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_read_only_commands_skip_save_when_disabled() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.storage.save_after_read = false;

        run_to_string(&display("flights.json"), &config);
        run_to_string(&select("flights.json", 1), &config);
        assert!(!dir.path().join("flights.json").exists());

        run_to_string(&add("flights.json", "Paris", 20_240_601, "A320"), &config);
        assert!(dir.path().join("flights.json").exists());
    }

    #[test]
    fn test_unsupported_extension_runs_without_persisting() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("flights.csv", "Paris", 20_240_601, "A320"), &config);
        assert!(!dir.path().join("flights.csv").exists());

        // nothing was stored, so a second run starts empty again
        let output = run_to_string(&display("flights.csv"), &config);
        assert_eq!(output, "No flights found.\n");
    }

    #[test]
    fn test_unsupported_extension_strict() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.storage.strict_format = true;

        let mut out = Vec::new();
        let err = run(&add("flights.csv", "Paris", 1, "A320"), &config, &mut out).unwrap_err();
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_malformed_file_is_fatal_and_untouched() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let path = dir.path().join("flights.json");
        std::fs::write(&path, "{oops").unwrap();

        let mut out = Vec::new();
        let result = run(&add("flights.json", "Paris", 1, "A320"), &config, &mut out);
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{oops");
    }

    #[test]
    fn test_filename_in_subdirectory() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        run_to_string(&add("trips/2024.xml", "Rome", 20_240_101, "E190"), &config);
        assert!(dir.path().join("trips").join("2024.xml").exists());
    }
}
