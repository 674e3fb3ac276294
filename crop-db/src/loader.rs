//! CSV loading and one-shot aggregation.
//!
//! # CSV Format
//!
//! Header row required, columns in any order:
//! `State_Name,District_Name,Crop_Year,Season,Crop,Area,Production`
//! (`Crop` is optional; unknown columns are ignored).

use crate::Database;
use crop_data::record::{CropRecord, WHOLE_YEAR};
use rusqlite::params;

/// Mean area/production per (state, district, year). `AVG` skips NULLs, so
/// coerced-missing cells drop out of the mean.
const AVERAGE_SQL: &str = "
    SELECT state, district, year, AVG(area), AVG(production)
    FROM records
    WHERE season = ?1
    GROUP BY state, district, year";

/// Round a mean to one decimal place, ties to even.
///
/// SQLite's `ROUND` sends ties away from zero, so rounding happens here
/// rather than in [`AVERAGE_SQL`].
pub(crate) fn round_one_decimal(mean: f64) -> f64 {
    (mean * 10.0).round_ties_even() / 10.0
}

impl Database {
    /// Load the crop production CSV and build the aggregate table.
    ///
    /// Fails if the CSV is malformed (see
    /// [`CropRecord::parse_crop_csv`]) or if data was already loaded into
    /// this database. Nothing is written when parsing fails.
    ///
    /// # Example CSV
    /// ```text
    /// State_Name,District_Name,Crop_Year,Season,Crop,Area,Production
    /// Tamil Nadu,COIMBATORE,2001,Whole Year ,Coconut ,8023,108600000
    /// Tamil Nadu,COIMBATORE,2001,Kharif     ,Rice,3960,9887
    /// ```
    pub fn load_crop_csv(&self, csv_data: &str) -> anyhow::Result<()> {
        let records = CropRecord::parse_crop_csv(csv_data)?;

        let mut conn = self.conn.borrow_mut();
        let loaded: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        if loaded > 0 {
            anyhow::bail!("crop data is already loaded ({} records)", loaded);
        }

        let tx = conn.transaction()?;
        let mut missing = 0u32;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO records (state, district, year, season, crop, area, production)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for r in &records {
                if r.area.is_none() || r.production.is_none() {
                    missing += 1;
                }
                stmt.execute(params![
                    r.state,
                    r.district,
                    r.year,
                    r.season,
                    r.crop,
                    r.area,
                    r.production
                ])?;
            }
        }
        let mut aggregated = 0usize;
        {
            let mut select = tx.prepare(AVERAGE_SQL)?;
            let mut insert = tx.prepare(
                "INSERT INTO aggregates (state, district, year, area, production)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            let groups = select
                .query_map(params![WHOLE_YEAR], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i32>(2)?,
                        row.get::<_, Option<f64>>(3)?,
                        row.get::<_, Option<f64>>(4)?,
                    ))
                })?
                .collect::<Result<Vec<_>, _>>()?;
            for (state, district, year, area, production) in groups {
                insert.execute(params![
                    state,
                    district,
                    year,
                    area.map(round_one_decimal),
                    production.map(round_one_decimal)
                ])?;
                aggregated += 1;
            }
        }
        tx.commit()?;

        self.view_cache.borrow_mut().clear();
        log::info!(
            "[Crop Debug] loader: Loaded {} records ({} with missing area/production), built {} aggregates",
            records.len(),
            missing,
            aggregated
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::round_one_decimal;
    use crate::Database;

    const HEADER: &str = "State_Name,District_Name,Crop_Year,Season,Crop,Area,Production\n";

    fn load(body: &str) -> Database {
        let db = Database::new().unwrap();
        db.load_crop_csv(&format!("{}{}", HEADER, body)).unwrap();
        db
    }

    #[test]
    fn three_rows_average_into_one_aggregate() {
        let db = load(
            "X,A,2001,Whole Year,Rice,10,100\n\
             X,A,2001,Whole Year,Rice,20,200\n\
             X,A,2001,Whole Year,Rice,30,300\n",
        );
        let rows = db.query_aggregates().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, "X");
        assert_eq!(rows[0].district, "A");
        assert_eq!(rows[0].year, 2001);
        assert_eq!(rows[0].area, Some(20.0));
        assert_eq!(rows[0].production, Some(200.0));
    }

    #[test]
    fn other_seasons_are_excluded_after_trimming() {
        let db = load(
            "X,A,2001,Whole Year ,Rice,10,100\n\
             X,A,2001, Kharif ,Rice,1000,1000\n\
             X,B,2001, Kharif ,Rice,5,5\n",
        );
        let rows = db.query_aggregates().unwrap();
        assert_eq!(rows.len(), 1, "only district A has a Whole Year row");
        assert_eq!(rows[0].area, Some(10.0));
        assert_eq!(rows[0].production, Some(100.0));

        let conn = db.conn.borrow();
        let kharif: i64 = conn
            .query_row("SELECT COUNT(*) FROM records WHERE season = 'Kharif'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(kharif, 2, "raw records keep every season, trimmed");
    }

    #[test]
    fn means_are_rounded_to_one_decimal() {
        let db = load(
            "X,A,2001,Whole Year,Rice,1,10\n\
             X,A,2001,Whole Year,Rice,2,10\n\
             X,A,2001,Whole Year,Rice,2,11\n",
        );
        let rows = db.query_aggregates().unwrap();
        // 5/3 = 1.666.., 31/3 = 10.333..
        assert_eq!(rows[0].area, Some(1.7));
        assert_eq!(rows[0].production, Some(10.3));
    }

    #[test]
    fn tied_means_round_to_even() {
        let db = load(
            "X,A,2001,Whole Year,Rice,2,0.5\n\
             X,A,2001,Whole Year,Rice,2.5,0\n\
             X,B,2001,Whole Year,Rice,1,3\n\
             X,B,2001,Whole Year,Rice,1,4\n\
             X,B,2001,Whole Year,Rice,1,4\n\
             X,B,2001,Whole Year,Rice,2,4\n",
        );
        let rows = db.query_aggregates().unwrap();
        // 2.25 and 0.25 round down to the even digit
        assert_eq!(rows[0].area, Some(2.2));
        assert_eq!(rows[0].production, Some(0.2));
        // 1.25 down, 3.75 up
        assert_eq!(rows[1].area, Some(1.2));
        assert_eq!(rows[1].production, Some(3.8));
    }

    #[test]
    fn round_one_decimal_ties_and_non_ties() {
        assert_eq!(round_one_decimal(12.5 / 10.0), 1.2);
        assert_eq!(round_one_decimal(17.5 / 10.0), 1.8);
        assert_eq!(round_one_decimal(-0.25), -0.2);
        assert_eq!(round_one_decimal(5.0 / 3.0), 1.7);
        assert_eq!(round_one_decimal(20.0), 20.0);
    }

    #[test]
    fn missing_measures_are_excluded_from_the_mean() {
        let db = load(
            "X,A,2001,Whole Year,Rice,10,\n\
             X,A,2001,Whole Year,Rice,n/a,300\n\
             X,A,2001,Whole Year,Rice,30,100\n",
        );
        let rows = db.query_aggregates().unwrap();
        assert_eq!(rows[0].area, Some(20.0));
        assert_eq!(rows[0].production, Some(200.0));
    }

    #[test]
    fn all_missing_measure_yields_missing_mean() {
        let db = load("X,A,2001,Whole Year,Rice,,7\n");
        let rows = db.query_aggregates().unwrap();
        assert_eq!(rows[0].area, None);
        assert_eq!(rows[0].production, Some(7.0));
    }

    #[test]
    fn groups_by_state_district_and_year() {
        let db = load(
            "X,A,2001,Whole Year,Rice,10,100\n\
             X,A,2002,Whole Year,Rice,20,200\n\
             X,B,2001,Whole Year,Rice,30,300\n\
             Y,A,2001,Whole Year,Rice,40,400\n",
        );
        assert_eq!(db.query_aggregates().unwrap().len(), 4);
    }

    #[test]
    fn aggregate_matches_mean_of_raw_rows() {
        let body = "\
Kerala,IDUKKI,2000,Whole Year ,Cardamom,1234.5,87
Kerala,IDUKKI,2000,Whole Year ,Coconut ,88,6100
Kerala,IDUKKI,2000,Whole Year ,Tea,4012,
Kerala,IDUKKI,2000,Rabi       ,Rice,9,9
Kerala,IDUKKI,2001,Whole Year ,Tea,50,60
Kerala,KOLLAM,2000,Whole Year ,Cashewnut,312,71.4
";
        let db = load(body);
        let records = crop_data::record::CropRecord::parse_crop_csv(&format!("{}{}", HEADER, body)).unwrap();

        for agg in db.query_aggregates().unwrap() {
            let matching: Vec<_> = records
                .iter()
                .filter(|r| r.is_whole_year())
                .filter(|r| r.state == agg.state && r.district == agg.district && r.year == agg.year)
                .collect();
            assert!(!matching.is_empty());
            let mean = |values: Vec<f64>| {
                if values.is_empty() {
                    None
                } else {
                    let m = values.iter().sum::<f64>() / values.len() as f64;
                    Some((m * 10.0).round_ties_even() / 10.0)
                }
            };
            let area = mean(matching.iter().filter_map(|r| r.area).collect());
            let production = mean(matching.iter().filter_map(|r| r.production).collect());
            assert_eq!(agg.area, area, "area for {:?}", (&agg.district, agg.year));
            assert_eq!(agg.production, production, "production for {:?}", (&agg.district, agg.year));
        }
    }

    #[test]
    fn malformed_csv_fails_and_leaves_database_empty() {
        let db = Database::new().unwrap();
        assert!(db.load_crop_csv("State_Name,District_Name\nX,A\n").is_err());
        assert!(db.query_aggregates().unwrap().is_empty());
        // a failed parse does not block a later good load
        db.load_crop_csv(&format!("{}X,A,2001,Whole Year,Rice,1,2\n", HEADER))
            .unwrap();
        assert_eq!(db.query_aggregates().unwrap().len(), 1);
    }

    #[test]
    fn empty_csv_fails() {
        let db = Database::new().unwrap();
        assert!(db.load_crop_csv("").is_err());
    }

    #[test]
    fn second_load_is_rejected() {
        let db = load("X,A,2001,Whole Year,Rice,10,100\n");
        let again = db.load_crop_csv(&format!("{}X,A,2001,Whole Year,Rice,50,500\n", HEADER));
        assert!(again.is_err());
        let rows = db.query_aggregates().unwrap();
        assert_eq!(rows[0].area, Some(10.0), "aggregate is never rebuilt");
    }
}
