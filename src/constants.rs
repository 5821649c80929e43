// src/constants.rs
//
// Application-wide names and defaults.

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "notekeeper";

/// Config file looked up in `<config dir>/notekeeper/` when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default cache file for the SQLite backend.
pub const SQLITE_FILE_NAME: &str = "notes.sqlite3";

/// Default cache file for the JSON backend.
pub const JSON_FILE_NAME: &str = "notes.json";

/// Title given to a note created without an explicit title.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Body given to a note created without an explicit body.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_NOTE_BODY: &str = "note";
