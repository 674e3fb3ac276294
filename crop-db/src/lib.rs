//! In-memory SQLite database layer for crop production data.
//!
//! Loads the crop production CSV once into an in-memory SQLite database,
//! materializes the per-(state, district, year) aggregate table, and exposes
//! typed queries for the Dioxus/D3.js scatter chart app compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data embedded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use crop_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_crop_csv(
//!     "State_Name,District_Name,Crop_Year,Season,Crop,Area,Production\n\
//!      X,A,2001,Whole Year ,Rice,10,100\n\
//!      X,A,2001,Whole Year ,Banana,30,300\n",
//! )
//! .unwrap();
//!
//! let view = db.query_crop_view(2001, "X").unwrap();
//! assert_eq!(view.district, vec!["A".to_string()]);
//! assert_eq!(view.x, vec![Some(20.0)]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `records` - raw rows, all seasons
//! - `aggregates` - mean area/production of the "Whole Year" rows per
//!   (state, district, year), rounded to one decimal place
//!
//! The aggregate table is filled exactly once, by [`Database::load_crop_csv`].
//! Every query afterwards filters it; none re-aggregates.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use crop_data::view_state::ViewState;
use models::CropView;
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory SQLite database holding the crop aggregate table.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment. Clones
/// share both the connection and the memoized filter results.
///
/// # Example
///
/// ```rust
/// use crop_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_crop_csv("State_Name,District_Name,Crop_Year,Season,Area,Production\nX,A,1999,Whole Year,1,2\n").unwrap();
/// assert_eq!(db.query_states().unwrap(), vec!["X".to_string()]);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
    view_cache: Rc<RefCell<HashMap<ViewState, CropView>>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_crop_csv`](Self::load_crop_csv) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
            view_cache: Rc::new(RefCell::new(HashMap::new())),
        })
    }
}
