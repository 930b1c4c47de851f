use crate::core::LogStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every entry, in list order, to `file`. Returns the number written.
    pub fn export(
        store: &LogStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let entries = store.list_entries()?;
        if entries.is_empty() {
            warning("No entries stored; writing an empty export.");
        }

        match format {
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Csv => export_csv(&entries, path)?,
        }

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::week::WeekStart;
    use crate::errors::AppError;
    use crate::models::entry::{NewEntry, WorkLogEntry};
    use chrono::NaiveDate;
    use std::fs;

    fn store_with_entries(dir: &Path) -> LogStore {
        let db = dir.join("export.sqlite");
        let store = LogStore::open(db.to_str().unwrap(), 2, WeekStart::Sunday).unwrap();
        for (date, hours, cat) in [("2024-01-15", 8.0, "eng"), ("2024-02-01", 1.5, "ops")] {
            store
                .create_entry(&NewEntry::new(
                    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                    hours,
                    cat,
                    "work, with comma",
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn json_export_matches_list_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_entries(dir.path());
        let out = dir.path().join("out.json");

        let n = ExportLogic::export(&store, ExportFormat::Json, out.to_str().unwrap(), false)
            .unwrap();

        let parsed: Vec<WorkLogEntry> =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(parsed, store.list_entries().unwrap());
        assert_eq!(parsed[0].category, "ops");
    }

    #[test]
    fn csv_export_has_header_and_quoted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_entries(dir.path());
        let out = dir.path().join("out.csv");

        ExportLogic::export(&store, ExportFormat::Csv, out.to_str().unwrap(), false).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,date,hours,category,description,created_at"
        );
        let first = lines.next().unwrap();
        assert!(first.contains("2024-02-01"));
        assert!(first.contains("\"work, with comma\""));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_entries(dir.path());
        let out = dir.path().join("exists.json");
        fs::write(&out, "keep me").unwrap();

        let err = ExportLogic::export(&store, ExportFormat::Json, out.to_str().unwrap(), false)
            .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
        assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

        ExportLogic::export(&store, ExportFormat::Json, out.to_str().unwrap(), true).unwrap();
        assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
    }
}
