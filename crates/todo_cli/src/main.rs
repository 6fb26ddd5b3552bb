//! Demo entry point for the todo store.
//!
//! # Responsibility
//! - Run one create/update/toggle/delete pass against a local store file.
//! - Print the resulting collection as pretty JSON.
//!
//! Set `TODO_STORE_LOG_DIR` to an absolute directory to enable file logs.

use std::error::Error;
use std::path::Path;
use todo_store::{default_log_level, init_logging, TodoStore};

const DEFAULT_DB_PATH: &str = "core/db";
const LOG_DIR_ENV: &str = "TODO_STORE_LOG_DIR";

fn main() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        init_logging(default_log_level(), &log_dir)?;
    }

    println!("todo_store version={}", todo_store::core_version());

    if let Some(parent) = Path::new(DEFAULT_DB_PATH).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let store = TodoStore::open(DEFAULT_DB_PATH);

    store.clear_database()?;
    let first = store.create("first todo")?;
    let second = store.create("second todo")?;
    store.update_content_by_id(&second.id, "second todo (updated)")?;
    store.update_status_by_id(&second.id)?;
    store.delete_by_id(&first.id)?;

    let todos = store.read()?;
    log::info!("event=demo_done module=cli status=ok count={}", todos.len());
    println!("{}", serde_json::to_string_pretty(&todos)?);
    Ok(())
}
