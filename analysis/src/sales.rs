//! Sales totals: a price catalogue joined with a sales record.
//!
//! The catalogue is a JSON array of `{"title": .., "price": ..}` objects, the
//! sales record a JSON array of `{"Product": .., "Quantity": ..}` objects.
//! Other fields are ignored.

use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bookinn_common::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::input;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogueItem {
    pub title: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sale {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSummary {
    pub total: f64,
    /// Products sold but missing from the catalogue, in sales order.
    pub unknown_products: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PairResult {
    pub catalogue: PathBuf,
    pub sales: PathBuf,
    pub summary: SalesSummary,
    pub elapsed: Duration,
}

/// Loads a JSON array of `T`, skipping (with a warning) elements that do
/// not have the shape of a `T`.
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AnalysisError> {
    let contents: String = input::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| AnalysisError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(AnalysisError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("{}: skipping record #{} ({e})", path.display(), idx + 1);
                None
            }
        })
        .collect();
    Ok(records)
}

pub fn load_catalogue(path: &Path) -> Result<Vec<CatalogueItem>, AnalysisError> {
    load_records(path)
}

pub fn load_sales(path: &Path) -> Result<Vec<Sale>, AnalysisError> {
    load_records(path)
}

/// Sum of price × quantity over `sales`. A title listed twice in the
/// catalogue keeps its first price.
pub fn total_sales(catalogue: &[CatalogueItem], sales: &[Sale]) -> SalesSummary {
    let mut prices: HashMap<&str, f64> = HashMap::with_capacity(catalogue.len());
    for item in catalogue {
        prices.entry(item.title.as_str()).or_insert(item.price);
    }

    let mut summary = SalesSummary::default();
    for sale in sales {
        match prices.get(sale.product.as_str()) {
            Some(price) => summary.total += price * sale.quantity,
            None => {
                warn!("Product not in catalogue, skipped: {}", sale.product);
                summary.unknown_products.push(sale.product.clone());
            }
        }
    }
    summary
}

pub fn process_pair(catalogue: &Path, sales: &Path) -> Result<PairResult, AnalysisError> {
    let start: Instant = Instant::now();
    let items: Vec<CatalogueItem> = load_catalogue(catalogue)?;
    let sold: Vec<Sale> = load_sales(sales)?;
    let summary: SalesSummary = total_sales(&items, &sold);

    Ok(PairResult {
        catalogue: catalogue.to_path_buf(),
        sales: sales.to_path_buf(),
        summary,
        elapsed: start.elapsed(),
    })
}

/// Runs every `(catalogue, sales)` pair. Pairs whose files cannot be loaded
/// are reported and left out.
pub fn process_pairs(pairs: &[(PathBuf, PathBuf)], mut on_pair: impl FnMut(&Path)) -> Vec<PairResult> {
    let mut results: Vec<PairResult> = Vec::new();
    for (catalogue, sales) in pairs {
        match process_pair(catalogue, sales) {
            Ok(result) => results.push(result),
            Err(e) => warn!("{e}"),
        }
        on_pair(sales);
    }
    results
}

/// Splits positional arguments into `(catalogue, sales)` pairs.
///
/// Returns `None` for an empty or odd-length list.
pub fn pair_up(args: &[PathBuf]) -> Option<Vec<(PathBuf, PathBuf)>> {
    if args.is_empty() || args.len() % 2 != 0 {
        return None;
    }
    Some(
        args.chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect(),
    )
}

pub fn results_text(results: &[PairResult]) -> String {
    let mut text = String::new();
    for result in results {
        let _ = write!(
            text,
            "{} and {}\n\
             Total sales cost: {:.2}\n\
             Elapsed: {:.2} seconds\n\
             \n----------\n\n",
            result.catalogue.display(),
            result.sales.display(),
            result.summary.total,
            result.elapsed.as_secs_f64()
        );
    }
    text
}

pub fn table(results: &[PairResult]) -> Table {
    let mut table = Table::new(["Catalogue", "Sales", "Total", "Elapsed"]);
    for result in results {
        table.push_row([
            result.catalogue.display().to_string(),
            result.sales.display().to_string(),
            format!("{:.2}", result.summary.total),
            format!("{:.4} s", result.elapsed.as_secs_f64()),
        ]);
    }
    table
}
