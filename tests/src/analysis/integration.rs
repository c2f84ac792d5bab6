use std::fs;
use std::path::PathBuf;

use bookinn_analysis::report::{self, CONVERSION_RESULTS, SALES_RESULTS, STATISTICS_RESULTS, WORD_COUNT_RESULTS};
use bookinn_analysis::{conversion, sales, statistics, word_count};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn statistics_results_file() {
    let dir = TempDir::new().unwrap();
    let data = write(&dir, "TC1.txt", "10\n20\nbad line\n30\n20\n");

    let results = statistics::process_files(&[data], |_| {});
    let path = report::write_results(dir.path(), STATISTICS_RESULTS, &statistics::results_text(&results)).unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("Count: 4"), "{text}");
    assert!(text.contains("Mean: 20"), "{text}");
    assert!(text.contains("Mode: 20"), "{text}");
    assert!(statistics::table(&results).to_string().contains("TC1.txt"));
}

#[test]
fn sales_over_two_pairs() {
    let dir = TempDir::new().unwrap();
    let catalogue = write(
        &dir,
        "priceCatalogue.json",
        r#"[{"title": "Tea", "price": 2.5}, {"title": "Cake", "price": 4}]"#,
    );
    let first = write(&dir, "sales1.json", r#"[{"Product": "Tea", "Quantity": 4}, {"Product": "Cake", "Quantity": 1}]"#);
    let second = write(&dir, "sales2.json", r#"[{"Product": "Coffee", "Quantity": 9}]"#);

    let pairs = sales::pair_up(&[catalogue.clone(), first, catalogue, second]).unwrap();
    let results = sales::process_pairs(&pairs, |_| {});
    let path = report::write_results(dir.path(), SALES_RESULTS, &sales::results_text(&results)).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].summary.total, 14.0);
    assert_eq!(results[1].summary.total, 0.0);
    assert_eq!(results[1].summary.unknown_products, vec!["Coffee".to_string()]);

    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text.matches("----------").count(), 2);
    assert!(text.contains("Total sales cost: 14.00"));
}

#[test]
fn conversion_table_is_the_results_file() {
    let dir = TempDir::new().unwrap();
    let numbers = write(&dir, "numbers.txt", "1\n-2\nABC\n255\n");

    let table = conversion::table(&conversion::process_files(&[numbers], |_| {}));
    let path = report::write_results(dir.path(), CONVERSION_RESULTS, &table.to_string()).unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("| 0xff |") || text.contains(" 0xff "), "{text}");
    assert!(text.contains("-0b10"));
    assert_eq!(table.rows().len(), 3);
}

#[test]
fn word_counts_across_files() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.txt", "The cat. The hat!");
    let second = write(&dir, "b.txt", "the dog");

    let results = word_count::process_files(&[first, second], |_| {});
    let table = word_count::table(&results);
    report::write_results(dir.path(), WORD_COUNT_RESULTS, &table.to_string()).unwrap();

    let the_row = table.rows().iter().find(|row| row[0] == "the").unwrap();
    assert_eq!(the_row[1..], ["2".to_string(), "1".to_string()]);
    assert!(dir.path().join(WORD_COUNT_RESULTS).exists());
}
