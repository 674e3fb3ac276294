use anyhow::Context;
use csv::ReaderBuilder;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// File name of the crop production dataset, relative to the fixtures directory.
pub const CROP_CSV_FILE: &str = "crop_production.csv";

/// The only season retained for aggregation.
pub const WHOLE_YEAR: &str = "Whole Year";

/// Header columns the dataset must carry. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "State_Name",
    "District_Name",
    "Crop_Year",
    "Season",
    "Area",
    "Production",
];

/// One row of the raw crop production dataset.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "State_Name")]
    pub state: String,
    #[serde(rename = "District_Name")]
    pub district: String,
    /// Crop year; surrounding whitespace is tolerated, anything else non-integer is not.
    #[serde(rename = "Crop_Year", deserialize_with = "trimmed_year")]
    pub year: i32,
    /// Season with surrounding whitespace removed (the source pads it, e.g. `"Kharif     "`).
    #[serde(rename = "Season", deserialize_with = "trimmed")]
    pub season: String,
    /// Crop name; carried through but never aggregated.
    #[serde(rename = "Crop", default)]
    pub crop: Option<String>,
    /// Cultivated area, `None` when the cell is blank or non-numeric.
    #[serde(rename = "Area", deserialize_with = "coerce_measure")]
    pub area: Option<f64>,
    /// Production, `None` when the cell is blank or non-numeric.
    #[serde(rename = "Production", deserialize_with = "coerce_measure")]
    pub production: Option<f64>,
}

impl CropRecord {
    /// True when this record belongs to the "Whole Year" season.
    pub fn is_whole_year(&self) -> bool {
        self.season == WHOLE_YEAR
    }

    /// Parse a CSV string of crop production data.
    ///
    /// Column order is free, but every name in [`REQUIRED_COLUMNS`] must be
    /// present in the header row. A row that cannot be tokenized, or whose
    /// `Crop_Year` is not an integer, fails the whole parse.
    pub fn parse_crop_csv(csv_object: &str) -> anyhow::Result<Vec<CropRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers().context("failed to read crop csv header row")?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                anyhow::bail!("crop csv is missing required column `{}`", column);
            }
        }

        let mut records = Vec::new();
        for (index, row) in rdr.deserialize::<CropRecord>().enumerate() {
            // header is line 1
            let record = row.with_context(|| format!("malformed crop record on line {}", index + 2))?;
            records.push(record);
        }
        log::info!("[Crop Debug] record: parsed {} crop records", records.len());
        Ok(records)
    }
}

/// Parse a numeric cell, treating blanks, junk and non-finite values as missing.
pub fn parse_measure(ess: &str) -> Option<f64> {
    ess.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn trimmed_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse::<i32>()
        .map_err(|e| D::Error::custom(format!("invalid Crop_Year {:?}: {}", raw, e)))
}

fn coerce_measure<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_measure))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "State_Name,District_Name,Crop_Year,Season,Crop,Area,Production\n";

    #[test]
    fn parses_rows_and_trims_season() {
        let csv = format!(
            "{}Tamil Nadu,COIMBATORE,2001,Whole Year ,Coconut ,1200,9800\n\
             Tamil Nadu,COIMBATORE,2001,Kharif     ,Rice,300,600\n",
            HEADER
        );
        let records = CropRecord::parse_crop_csv(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state, "Tamil Nadu");
        assert_eq!(records[0].district, "COIMBATORE");
        assert_eq!(records[0].year, 2001);
        assert_eq!(records[0].season, "Whole Year");
        assert!(records[0].is_whole_year());
        assert_eq!(records[1].season, "Kharif");
        assert!(!records[1].is_whole_year());
        assert_eq!(records[0].area, Some(1200.0));
        assert_eq!(records[0].production, Some(9800.0));
    }

    #[test]
    fn blank_and_junk_measures_become_missing() {
        let csv = format!(
            "{}X,A,2001,Whole Year,Rice,,=\nX,A,2001,Whole Year,Rice,abc, 42.5 \n",
            HEADER
        );
        let records = CropRecord::parse_crop_csv(&csv).unwrap();
        assert_eq!(records[0].area, None);
        assert_eq!(records[0].production, None);
        assert_eq!(records[1].area, None);
        assert_eq!(records[1].production, Some(42.5));
    }

    #[test]
    fn non_finite_measures_become_missing() {
        assert_eq!(parse_measure("NaN"), None);
        assert_eq!(parse_measure("inf"), None);
        assert_eq!(parse_measure("1e3"), Some(1000.0));
    }

    #[test]
    fn columns_may_appear_in_any_order_with_extras() {
        let csv = "\
Production,Crop,Area,Season,Crop_Year,District_Name,State_Name,Notes
100,Rice,10,Whole Year,1999,A,X,ignored
";
        let records = CropRecord::parse_crop_csv(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, "X");
        assert_eq!(records[0].year, 1999);
        assert_eq!(records[0].crop.as_deref(), Some("Rice"));
    }

    #[test]
    fn crop_column_is_optional() {
        let csv = "State_Name,District_Name,Crop_Year,Season,Area,Production\nX,A,2001,Rabi,1,2\n";
        let records = CropRecord::parse_crop_csv(csv).unwrap();
        assert_eq!(records[0].crop, None);
    }

    #[test]
    fn missing_required_column_fails() {
        let csv = "State_Name,District_Name,Crop_Year,Season,Area\nX,A,2001,Rabi,1\n";
        let err = CropRecord::parse_crop_csv(csv).unwrap_err();
        assert!(err.to_string().contains("Production"));
    }

    #[test]
    fn empty_input_fails() {
        assert!(CropRecord::parse_crop_csv("").is_err());
    }

    #[test]
    fn non_integer_year_fails() {
        let csv = format!("{}X,A,two thousand,Whole Year,Rice,1,2\n", HEADER);
        let err = CropRecord::parse_crop_csv(&csv).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn padded_year_is_trimmed() {
        let csv = format!("{}X,A, 2001 ,Whole Year,Rice,1,2\n", HEADER);
        let records = CropRecord::parse_crop_csv(&csv).unwrap();
        assert_eq!(records[0].year, 2001);
    }

    #[test]
    fn blank_year_fails() {
        let csv = format!("{}X,A,  ,Whole Year,Rice,1,2\n", HEADER);
        let err = CropRecord::parse_crop_csv(&csv).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn header_only_yields_no_records() {
        let records = CropRecord::parse_crop_csv(HEADER).unwrap();
        assert!(records.is_empty());
    }
}
