//! SQL schema for the in-memory crop database.
//!
//! Applied as a single batch when the database is created.

/// Returns the full SQL schema as a single batch string.
///
/// - `records` - every raw CSV row, season already trimmed; area and
///   production are NULL where the cell was not numeric
/// - `aggregates` - mean area/production per (state, district, year) over
///   the "Whole Year" records, filled once at load time
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        id INTEGER PRIMARY KEY,
        state TEXT NOT NULL,
        district TEXT NOT NULL,
        year INTEGER NOT NULL,
        season TEXT NOT NULL,
        crop TEXT,
        area REAL,
        production REAL
    );
    CREATE INDEX IF NOT EXISTS idx_records_season ON records(season);

    CREATE TABLE IF NOT EXISTS aggregates (
        state TEXT NOT NULL,
        district TEXT NOT NULL,
        year INTEGER NOT NULL,
        area REAL,
        production REAL,
        PRIMARY KEY (state, district, year)
    );
    CREATE INDEX IF NOT EXISTS idx_agg_year_state ON aggregates(year, state);
    CREATE INDEX IF NOT EXISTS idx_agg_state ON aggregates(state);
    "#
}
