//! Per-asset close and daily-return series loaded from the bundled CSV.
//!
//! The file has a leading date column followed by `<ASSET>_Close` /
//! `<ASSET>_return` column pairs, one row per trading day, ascending. Cells
//! may be empty where an asset has no observation for a date; gaps are
//! preserved, never interpolated.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use portfolio_core::DataError;

const CLOSE_SUFFIX: &str = "_Close";
const RETURN_SUFFIX: &str = "_return";

/// S&P 500 and Bitcoin return columns come under either of two names
/// depending on which fetch script produced the file.
const SP500_COLUMNS: [&str; 2] = ["GSPC_return", "SP500_return"];
const BTC_COLUMNS: [&str; 2] = ["BTC_return", "BTC-USD_return"];

pub struct ReturnStore {
    dates: Vec<String>,
    columns: HashMap<String, Vec<Option<f64>>>,
}

impl ReturnStore {
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path)
            .map_err(|e| DataError::FileError(format!("{}: {e}", path.display())))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr
            .headers()
            .map_err(|e| DataError::FileError(e.to_string()))?
            .clone();
        if headers.is_empty() {
            return Err(DataError::InvalidData("empty CSV header".to_string()));
        }

        // Column 0 is the date index; every other header names a series.
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        let mut dates = Vec::new();
        let mut cells: Vec<Vec<Option<f64>>> = vec![Vec::new(); names.len()];

        for record in rdr.records() {
            let record = record.map_err(|e| DataError::FileError(e.to_string()))?;
            let date = record
                .get(0)
                .ok_or_else(|| DataError::InvalidData("missing date cell".to_string()))?;
            dates.push(date.to_string());
            for (i, name) in names.iter().enumerate() {
                let cell = record.get(i + 1).unwrap_or("");
                let value = if cell.is_empty() {
                    None
                } else {
                    Some(cell.parse::<f64>().map_err(|_| {
                        DataError::InvalidData(format!("bad number '{cell}' in column {name}"))
                    })?)
                };
                cells[i].push(value);
            }
        }

        let columns: HashMap<String, Vec<Option<f64>>> =
            names.into_iter().zip(cells).collect();
        tracing::debug!(rows = dates.len(), columns = columns.len(), "loaded return store");
        Ok(ReturnStore { dates, columns })
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Asset ids present in the file, derived from the Close columns.
    pub fn asset_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .columns
            .keys()
            .filter_map(|c| c.strip_suffix(CLOSE_SUFFIX))
            .map(str::to_string)
            .collect();
        ids.sort();
        ids
    }

    pub fn has_returns(&self, asset_id: &str) -> bool {
        self.columns.contains_key(&format!("{asset_id}{RETURN_SUFFIX}"))
    }

    /// Daily return series for one asset, or an error naming the available
    /// ids when the asset is not in the file.
    pub fn returns(&self, asset_id: &str) -> Result<&[Option<f64>], DataError> {
        self.columns
            .get(&format!("{asset_id}{RETURN_SUFFIX}"))
            .map(Vec::as_slice)
            .ok_or_else(|| DataError::UnknownAsset {
                asset_id: asset_id.to_string(),
                available: self.asset_ids(),
            })
    }

    pub fn closes(&self, asset_id: &str) -> Result<&[Option<f64>], DataError> {
        self.columns
            .get(&format!("{asset_id}{CLOSE_SUFFIX}"))
            .map(Vec::as_slice)
            .ok_or_else(|| DataError::UnknownAsset {
                asset_id: asset_id.to_string(),
                available: self.asset_ids(),
            })
    }

    pub fn sp500_returns(&self) -> Option<&[Option<f64>]> {
        SP500_COLUMNS
            .iter()
            .find_map(|c| self.columns.get(*c))
            .map(Vec::as_slice)
    }

    pub fn btc_returns(&self) -> Option<&[Option<f64>]> {
        BTC_COLUMNS
            .iter()
            .find_map(|c| self.columns.get(*c))
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Date,VTI_Close,VTI_return,BND_Close,BND_return,GSPC_return,BTC-USD_return
2025-01-02,240.0,,72.0,,,0.02
2025-01-03,242.4,0.01,72.36,0.005,0.008,-0.01
2025-01-06,244.8,0.0099,,,0.002,0.03
";

    #[test]
    fn parses_dates_and_columns() {
        let store = ReturnStore::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(store.dates().len(), 3);
        assert_eq!(store.asset_ids(), vec!["BND".to_string(), "VTI".to_string()]);
        let vti = store.returns("VTI").unwrap();
        assert_eq!(vti[0], None);
        assert_eq!(vti[1], Some(0.01));
    }

    #[test]
    fn gaps_are_preserved_as_none() {
        let store = ReturnStore::from_reader(CSV.as_bytes()).unwrap();
        let bnd = store.returns("BND").unwrap();
        assert_eq!(bnd[2], None);
    }

    #[test]
    fn unknown_asset_lists_available_ids() {
        let store = ReturnStore::from_reader(CSV.as_bytes()).unwrap();
        let err = store.returns("QQQ").unwrap_err();
        match err {
            DataError::UnknownAsset { asset_id, available } => {
                assert_eq!(asset_id, "QQQ");
                assert!(available.contains(&"VTI".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn benchmark_columns_resolve_under_either_name() {
        let store = ReturnStore::from_reader(CSV.as_bytes()).unwrap();
        assert!(store.sp500_returns().is_some());
        assert!(store.btc_returns().is_some());
        assert_eq!(store.btc_returns().unwrap()[0], Some(0.02));
    }

    #[test]
    fn bad_cell_is_an_error() {
        let csv = "Date,VTI_return\n2025-01-02,abc\n";
        assert!(ReturnStore::from_reader(csv.as_bytes()).is_err());
    }
}
