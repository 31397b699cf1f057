mod common;
use bikeshare::core::viewer::{ORIGINAL_LABEL, TableViewer, render_page};
use bikeshare::dataset::DatasetLoader;
use bikeshare::errors::AppError;
use bikeshare::models::{City, FilterPreset, Selection};
use bikeshare::ui::prompt::{CANCELLED_NOTICE, CITY_PROMPT, MONTH_PROMPT};
use bikeshare::ui::{Console, StreamReader};
use chrono::Month;
use common::{config_for, data_dir, run_session};
use std::io::Cursor;

fn scripted(script: &str) -> Console<StreamReader<Cursor<String>>, Vec<u8>> {
    Console::new(StreamReader::new(Cursor::new(script.to_string())), Vec::new())
}

fn output_of(console: Console<StreamReader<Cursor<String>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

fn data_lines(page: &str) -> usize {
    page.lines().filter(|l| l.contains("2017-")).count()
}

// ---------------------------
// Input collector
// ---------------------------

#[test]
fn test_invalid_city_is_asked_again() {
    let mut console = scripted("boston\nnew york\nNew York City\n");
    let city = console.ask_city().expect("city");
    assert_eq!(city, City::NewYorkCity);

    let out = output_of(console);
    assert_eq!(out.matches("No valid city was entered. Please try again.").count(), 2);
    assert_eq!(out.matches(CITY_PROMPT).count(), 3);
    assert_eq!(out.matches("Thank you for the input.").count(), 1);
}

#[test]
fn test_month_accepts_any_case_and_all() {
    let mut console = scripted("july\nFEBRUARY\n");
    assert_eq!(console.ask_month().unwrap(), Selection::Only(Month::February));

    let mut console = scripted("  All \n");
    assert_eq!(console.ask_month().unwrap(), Selection::All);

    let mut console = scripted("december\njune\n");
    console.ask_month().unwrap();
    let out = output_of(console);
    assert_eq!(out.matches("No valid month was entered. Please try again.").count(), 1);
    assert_eq!(out.matches(MONTH_PROMPT).count(), 2);
}

#[test]
fn test_thursday_is_rejected() {
    let mut console = scripted("thursday\nfriday\n");
    console.ask_day().unwrap();
    let out = output_of(console);
    assert!(out.contains("No valid day was entered. Please try again."));
}

#[test]
fn test_end_of_input_cancels() {
    let mut console = scripted("boston\n");
    let err = console.ask_city().unwrap_err();
    assert!(matches!(err, AppError::Cancelled));

    let out = output_of(console);
    assert!(out.ends_with(&format!("{CANCELLED_NOTICE}\n")));
}

#[test]
fn test_confirm_is_literal() {
    let mut console = scripted("yes\nYes\nno\n");
    assert!(console.confirm("? ").unwrap());
    assert!(!console.confirm("? ").unwrap());
    assert!(!console.confirm("? ").unwrap());
}

// ---------------------------
// Table viewer
// ---------------------------

#[test]
fn test_viewer_pages_through_twelve_rows() {
    let dir = data_dir();
    let original = DatasetLoader::new(dir.path())
        .read_original(City::Chicago)
        .expect("read");
    assert_eq!(original.len(), 12);

    let mut console = scripted("yes\nyes\nyes\nno\n");
    let pages = TableViewer::new(5)
        .show(&mut console, &original, ORIGINAL_LABEL, City::Chicago)
        .expect("viewer");
    assert_eq!(pages, 3);

    let out = output_of(console);
    assert!(out.contains("Do you want to see the first 5 rows of the ORIGINAL DataFrame for Chicago?"));
    assert_eq!(out.matches("Do you want to see 5 more rows?").count(), 3);
    assert_eq!(data_lines(&out), 12);
    assert!(out.contains("1436286"));
}

#[test]
fn test_viewer_page_boundaries() {
    let dir = data_dir();
    let original = DatasetLoader::new(dir.path())
        .read_original(City::Chicago)
        .expect("read");

    assert_eq!(data_lines(&render_page(&original, 0, 5)), 5);
    assert_eq!(data_lines(&render_page(&original, 5, 5)), 5);

    let tail = render_page(&original, 10, 5);
    assert_eq!(data_lines(&tail), 2);
    assert!(tail.contains("1436286"));

    let empty = render_page(&original, 15, 5);
    assert!(empty.starts_with("Empty table"));
    assert!(empty.contains("Start Time"));
}

#[test]
fn test_viewer_keeps_asking_past_the_end() {
    let dir = data_dir();
    let original = DatasetLoader::new(dir.path())
        .read_original(City::Washington)
        .expect("read");

    // six rows: [0,5), [5,6), then two empty pages
    let mut console = scripted("yes\nyes\nyes\nyes\nno\n");
    let pages = TableViewer::new(5)
        .show(&mut console, &original, ORIGINAL_LABEL, City::Washington)
        .unwrap();
    assert_eq!(pages, 4);

    let out = output_of(console);
    assert_eq!(out.matches("Empty table").count(), 2);
}

#[test]
fn test_viewer_stops_on_first_no() {
    let dir = data_dir();
    let original = DatasetLoader::new(dir.path())
        .read_original(City::Chicago)
        .unwrap();

    let mut console = scripted("Yes\n");
    let pages = TableViewer::new(5)
        .show(&mut console, &original, ORIGINAL_LABEL, City::Chicago)
        .unwrap();
    assert_eq!(pages, 0);
    assert_eq!(data_lines(&output_of(console)), 0);
}

// ---------------------------
// Session loop
// ---------------------------

#[test]
fn test_full_cycle_chicago_february() {
    let dir = data_dir();
    let cfg = config_for(dir.path());

    let (result, out) = run_session(
        &cfg,
        FilterPreset::default(),
        "chicago\nfebruary\nall\nno\nyes\nno\nno\n",
    );
    result.expect("session");

    assert!(out.starts_with("Hello! Let's explore some US bikeshare data!"));
    assert!(out.contains("You chose the month February. Therefore, no month evaluation takes place."));
    assert!(out.contains("The most common day of bike rental is: Monday"));
    assert!(out.contains(
        "Do you want to see the first 5 rows of the MODIFIED (filtered, additional functional columns) DataFrame for Chicago?"
    ));
    // modified table shows the derived columns
    assert!(out.contains("Month"));
    assert!(out.contains("February"));
    assert!(out.contains("Would you like to restart?"));
    assert!(!out.contains("Restart:"));
}

#[test]
fn test_restart_runs_another_cycle() {
    let dir = data_dir();
    let cfg = config_for(dir.path());

    let (result, out) = run_session(
        &cfg,
        FilterPreset::default(),
        "chicago\nall\nall\nno\nno\nYES\nwashington\nmarch\nall\nno\nno\nno\n",
    );
    result.expect("session");

    assert_eq!(out.matches("Hello! Let's explore some US bikeshare data!").count(), 2);
    assert!(out.contains("\nRestart:"));
    assert!(out.contains("The Washington file does not contain any gender information."));
    assert_eq!(out.matches("Would you like to restart?").count(), 2);
}

#[test]
fn test_cancel_mid_cycle_stops_everything() {
    let dir = data_dir();
    let cfg = config_for(dir.path());

    let (result, out) = run_session(&cfg, FilterPreset::default(), "chicago\nfebruary\n");
    assert!(matches!(result, Err(AppError::Cancelled)));
    assert!(out.ends_with(&format!("{CANCELLED_NOTICE}\n")));
    assert!(!out.contains("Calculating"));
}

#[test]
fn test_preset_filters_skip_prompts_once() {
    let dir = data_dir();
    let cfg = config_for(dir.path());
    let preset = FilterPreset {
        city: Some(City::Chicago),
        month: Some(Selection::Only(Month::February)),
        day: Some(Selection::All),
    };

    let (result, out) = run_session(&cfg, preset, "no\nno\nyes\nwashington\nall\nall\nno\nno\nno\n");
    result.expect("session");

    // only the restarted cycle prompts
    assert_eq!(out.matches(CITY_PROMPT).count(), 1);
    assert!(out.contains("You chose the month February."));
}

#[test]
fn test_missing_data_file_is_reported_and_recoverable() {
    let empty = tempfile::tempdir().unwrap();
    let cfg = config_for(empty.path());

    let (result, out) = run_session(&cfg, FilterPreset::default(), "chicago\nall\nall\nno\n");
    result.expect("session survives a missing file");

    assert!(out.contains("Data file not found"));
    assert!(!out.contains("Calculating"));
    assert!(out.contains("Would you like to restart?"));
}

#[test]
fn test_page_size_comes_from_config() {
    let dir = data_dir();
    let mut cfg = config_for(dir.path());
    cfg.page_size = 3;

    let (result, out) = run_session(&cfg, FilterPreset::default(), "chicago\nall\nall\nyes\nno\nno\nno\n");
    result.expect("session");

    assert!(out.contains("Do you want to see the first 3 rows of the ORIGINAL DataFrame for Chicago?"));
    assert!(out.contains("Do you want to see 3 more rows?"));
}
