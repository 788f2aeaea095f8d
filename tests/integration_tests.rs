use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use solar_analyzer::analyzers::{Aggregator, InsightSet};
use solar_analyzer::config::AppConfig;
use solar_analyzer::models::{Country, Metric};
use solar_analyzer::readers::DatasetLoader;
use solar_analyzer::store::DatasetStore;
use solar_analyzer::views;
use solar_analyzer::AnalysisError;

/// Write a synthetic dataset: `rows` records cycling through the day, with
/// a distinct GHI level per file.
fn write_dataset(dir: &Path, name: &str, rows: usize, ghi_base: f64, tamb: f64) {
    let mut file = std::fs::File::create(dir.join(name)).unwrap();
    writeln!(file, "Timestamp,GHI,DNI,DHI,Tamb").unwrap();
    for i in 0..rows {
        writeln!(
            file,
            "2021-08-{:02} {:02}:00,{:.1},{:.1},{:.1},{:.1}",
            1 + i / 24,
            i % 24,
            ghi_base + (i % 24) as f64 * 10.0,
            ghi_base / 2.0,
            ghi_base / 4.0,
            tamb
        )
        .unwrap();
    }
}

fn full_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), "benin.csv", 100, 500.0, 28.2);
    write_dataset(dir.path(), "sierraleone.csv", 100, 300.0, 25.3);
    write_dataset(dir.path(), "togo.csv", 100, 400.0, 26.9);
    dir
}

#[tokio::test]
async fn test_end_to_end_load_and_summarize() {
    let dir = full_fixture();
    let config = AppConfig::with_data_dir(dir.path());

    let outcome = DatasetLoader::new()
        .load_all(config.country_files())
        .await
        .unwrap();

    // Three files of 100 rows each concatenate to 300 records
    assert_eq!(outcome.combined.record_count(), 300);
    assert_eq!(outcome.per_country.len(), 3);
    assert_eq!(outcome.report.total_records(), 300);

    // 3 countries x 3 metrics, every cell populated and finite
    let table = Aggregator::new().summary_table(&outcome.combined);
    assert_eq!(table.len(), 9);
    for country in Country::ALL {
        for metric in Metric::IRRADIANCE {
            let summary = table.get(country, metric).unwrap();
            assert!(summary.is_finite(), "{} {} not finite", country, metric);
        }
    }
}

#[tokio::test]
async fn test_partial_failure_keeps_remaining_countries() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), "benin.csv", 50, 500.0, 28.0);
    write_dataset(dir.path(), "togo.csv", 25, 400.0, 27.0);
    // sierraleone.csv deliberately absent

    let config = AppConfig::with_data_dir(dir.path());
    let outcome = DatasetLoader::new()
        .load_all(config.country_files())
        .await
        .unwrap();

    assert_eq!(outcome.combined.record_count(), 75);
    assert!(outcome.dataset(Country::SierraLeone).is_none());
    assert_eq!(outcome.report.failed.len(), 1);

    // The views still render; the missing country shows the placeholder
    let country_view = views::render_country(outcome.dataset(Country::SierraLeone));
    assert!(country_view.contains("No data available."));

    // And the ranking substitutes zero for the missing country
    let insights = InsightSet::generate(&outcome.combined);
    let sierra_leone = insights
        .ghi_ranking
        .iter()
        .find(|(c, _)| *c == Country::SierraLeone)
        .unwrap();
    assert_eq!(sierra_leone.1, 0.0);
}

#[tokio::test]
async fn test_total_failure_is_terminal() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());

    let result = DatasetLoader::new().load_all(config.country_files()).await;
    assert!(matches!(result, Err(AnalysisError::NoDataLoaded)));
}

#[tokio::test]
async fn test_store_serves_all_views() {
    let dir = full_fixture();
    let store = DatasetStore::new(AppConfig::with_data_dir(dir.path()));
    let outcome = store.get_or_load().await.unwrap();

    let overview = views::render_overview(&outcome);
    assert!(overview.contains("Total Records:      300"));
    assert!(overview.contains("Countries Analyzed: 3"));

    let table = Aggregator::new().summary_table(&outcome.combined);
    let comparison = views::render_comparison(&table);
    for country in Country::ALL {
        assert!(comparison.contains(country.label()));
    }

    let insights = InsightSet::generate(&outcome.combined);
    let observations = views::render_observations(&insights);
    // Benin has the highest synthetic GHI; Sierra Leone's 25.3°C mean is
    // closest to the 25°C reference
    assert!(observations.contains("1. Benin"));
    assert!(observations.contains("Optimal Temperature: Sierra Leone (25.30°C)"));
}

#[tokio::test]
async fn test_summary_statistics_against_hand_computed_values() {
    let dir = TempDir::new().unwrap();
    // Four rows, one missing GHI: values {100, 200, 400}
    let mut file = std::fs::File::create(dir.path().join("benin.csv")).unwrap();
    writeln!(file, "Timestamp,GHI,DNI,DHI,Tamb").unwrap();
    writeln!(file, "2021-08-09 09:00,100.0,50.0,25.0,26.0").unwrap();
    writeln!(file, "2021-08-09 10:00,200.0,100.0,50.0,26.5").unwrap();
    writeln!(file, "2021-08-09 11:00,,150.0,75.0,27.0").unwrap();
    writeln!(file, "2021-08-09 12:00,400.0,200.0,100.0,27.5").unwrap();
    drop(file);
    write_dataset(dir.path(), "sierraleone.csv", 10, 300.0, 25.0);
    write_dataset(dir.path(), "togo.csv", 10, 400.0, 27.0);

    let config = AppConfig::with_data_dir(dir.path());
    let outcome = DatasetLoader::new()
        .load_all(config.country_files())
        .await
        .unwrap();

    let table = Aggregator::new().summary_table(&outcome.combined);
    let ghi = table.get(Country::Benin, Metric::Ghi).unwrap();
    assert!((ghi.mean - 700.0 / 3.0).abs() < 1e-9);
    assert_eq!(ghi.median, 200.0);
    assert_eq!(ghi.min, 100.0);
    assert_eq!(ghi.max, 400.0);
}
