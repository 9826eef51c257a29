mod common;
use activitylog::config::Config;
use activitylog::models::DayTotal;
use activitylog::ui::chart::render_bar_chart;
use activitylog::utils::DateRange;
use activitylog::utils::formatting::{decimal_hours, hours_readable};
use activitylog::utils::table::{Column, Table};
use common::{day, rec, temp_out};
use std::fs;

#[test]
fn test_table_pads_to_widest_cell() {
    let mut t = Table::new(vec![Column::left("Date"), Column::right("Hours")]);
    t.add_row(vec!["01/01/2024".into(), "5.5h".into()]);

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Date       Hours");
    assert_eq!(lines[1], "---------- -----");
    assert_eq!(lines[2], "01/01/2024  5.5h");
}

#[test]
fn test_bar_chart_scales_to_longest_day() {
    let totals = vec![
        DayTotal {
            date: day(2024, 1, 1),
            total_hours: 8.0,
        },
        DayTotal {
            date: day(2024, 1, 2),
            total_hours: 2.0,
        },
    ];

    let chart = render_bar_chart(&totals, 8, "#");
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[0], "01/01/2024 │######## 8h");
    assert_eq!(lines[1], "02/01/2024 │## 2h");
    assert_eq!(render_bar_chart(&[], 8, "#"), "");
}

#[test]
fn test_hours_formatting() {
    assert_eq!(decimal_hours(2.0), "2.0");
    assert_eq!(decimal_hours(3.5), "3.5");
    assert_eq!(decimal_hours(0.25), "0.25");
    assert_eq!(hours_readable(5.5), "5.5h");
    assert_eq!(hours_readable(1.0), "1h");
}

#[test]
fn test_range_expressions() {
    let month = DateRange::parse("2024-02").expect("month");
    assert_eq!(month.start, day(2024, 2, 1));
    assert_eq!(month.end, day(2024, 2, 29));

    let span = DateRange::parse("2023:2024").expect("years");
    assert_eq!(span.start, day(2023, 1, 1));
    assert_eq!(span.end, day(2024, 12, 31));

    let december = DateRange::parse("2024-12").expect("december");
    assert_eq!(december.end, day(2024, 12, 31));

    assert!(DateRange::parse("2024-03-10:2024-03-01").is_err());
    assert!(DateRange::parse("2024:2024-03").is_err());
    assert!(DateRange::parse_opt(Some("all")).expect("all").is_none());
    assert!(DateRange::parse_opt(None).expect("none").is_none());
}

#[test]
fn test_range_filter_keeps_order() {
    let records = vec![
        rec(day(2024, 3, 5), 1.0, "in-1"),
        rec(day(2024, 4, 1), 1.0, "out"),
        rec(day(2024, 3, 1), 1.0, "in-2"),
    ];

    let range = DateRange::parse("2024-03").expect("range");
    let titles: Vec<String> = range.filter(&records).into_iter().map(|r| r.title).collect();

    assert_eq!(titles, ["in-1", "in-2"]);
}

#[test]
fn test_config_defaults_fill_missing_keys() {
    let path = temp_out("config_partial", "conf");
    fs::write(&path, "data_file: /tmp/somewhere/activities.csv\n").expect("write");

    let cfg = Config::load_from(std::path::Path::new(&path)).expect("load");

    assert_eq!(cfg.data_file, "/tmp/somewhere/activities.csv");
    assert_eq!(cfg.chart_width, 40);
    assert_eq!(cfg.bar_char, "█");
    assert!(cfg.check().is_empty());
}

#[test]
fn test_config_check_reports_problems() {
    let cfg = Config {
        data_file: String::new(),
        chart_width: 0,
        bar_char: "#".to_string(),
        wrap_width: 72,
    };

    let problems = cfg.check();
    assert_eq!(problems.len(), 2);
}
