use std::sync::Arc;

use runlog::catalogue::{FilesInUse, GenericValueErrors, MissingFolders};
use runlog::{
    Aggregator, Disposition, Fault, KindTag, LogFormat, LogOptions, MemorySink, NoopPolicy,
    RecordingPresenter, RunlogConfig, Severity, WriterSink, settle,
};
use runlog_test_utils::{base_instant, read_fixture, record_at};

fn quiet() -> Aggregator {
    Aggregator::new().with_policy(Arc::new(NoopPolicy))
}

#[test]
fn files_in_use_dedup_on_path() {
    let mut agg = quiet();
    agg.report(Fault::semi_fatal(FilesInUse::new("x.csv", r"C:\a\x.csv", "Loader::open()")));
    agg.report(Fault::semi_fatal(FilesInUse::new("x.csv", r"C:\a\x.csv", "Loader::retry()")));
    agg.report(Fault::semi_fatal(FilesInUse::new("y.csv", r"C:\a\y.csv", "Loader::open()")));

    let container = agg
        .container(Severity::SemiFatal, KindTag::FilesInUse)
        .expect("files in use container");
    assert_eq!(container.element_count(), 2);
    assert!(
        agg.concise_message()
            .contains("\t2 files are in-use and could not be opened.\n")
    );
}

#[test]
fn fatal_folder_and_non_fatal_value_error() {
    let mut agg = quiet();
    agg.report(Fault::fatal(MissingFolders::new(r"C:\out\", "Setup::check()", "")));
    agg.report(Fault::non_fatal(GenericValueErrors::new(
        "Cannot convert 'abc' to a date.",
        "Parser::date()",
    )));

    assert!(agg.should_abort_operation());

    let concise = agg.concise_message();
    assert!(concise.contains("1 run time programming logic issues occurred."));
    assert!(!concise.contains("folders are missing"));

    let fatal = agg.fatal_message();
    assert!(fatal.contains("1 folders are missing."));
    assert!(fatal.ends_with("Exiting application."));
}

#[test]
fn merging_into_an_empty_aggregator_leaves_the_source_alone() {
    let mut x = quiet();
    x.report(Fault::non_fatal(GenericValueErrors::new("one", "f()")));
    x.report(Fault::non_fatal(GenericValueErrors::new("two", "f()")));
    x.report(Fault::non_fatal(FilesInUse::new("z.csv", r"C:\z.csv", "g()")));
    let snapshot = format!("{x:?}");

    let mut y = quiet();
    y.merge(&x);

    assert_eq!(y.element_count(), 3);
    assert_eq!(x.element_count(), 3);
    assert_eq!(format!("{x:?}"), snapshot);
}

#[test]
fn export_is_strictly_ordered_and_gap_free() {
    let mut agg = quiet();
    let secs = [5, 0, 0, 3, 5, 5, 1];
    for (i, s) in secs.iter().enumerate() {
        let text = format!("value {i}");
        agg.report(Fault::non_fatal(GenericValueErrors::from_record(record_at(
            "Parser::value()",
            *s,
            &[text.as_str()],
        ))));
    }
    agg.report(Fault::semi_fatal(FilesInUse::from_record(record_at(
        "Loader::open()",
        0,
        &["a.csv", "in/a.csv"],
    ))));
    agg.report_at(std::io::Error::other("disk"), base_instant());
    agg.report_at(std::io::Error::other("disk"), base_instant());

    let rows = agg.chronological_rows();
    assert_eq!(rows.len(), agg.element_count());
    assert!(rows.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(
        rows.iter().map(|r| r.sequence).collect::<Vec<_>>(),
        (0..rows.len()).collect::<Vec<_>>()
    );
    // the SemiFatal row is visited first, so it keeps the exact instant
    assert_eq!(rows[0].origin, "Loader::open()");
}

#[test]
fn export_is_repeatable() {
    let mut agg = quiet();
    for _ in 0..3 {
        agg.report_at(std::io::Error::other("disk"), base_instant());
    }
    agg.report(Fault::non_fatal(GenericValueErrors::from_record(record_at(
        "Parser::value()",
        0,
        &["bad"],
    ))));
    assert_eq!(agg.chronological_rows(), agg.chronological_rows());
}

#[test]
fn fatal_run_settles_through_configured_sink() {
    let config = RunlogConfig::from_toml_str(&read_fixture("runlog.toml")).expect("fixture");
    let mut agg = Aggregator::from_config(&config);
    agg.report(Fault::fatal(MissingFolders::new(r"C:\out\", "Setup::check()", "")));
    agg.report(Fault::non_fatal(GenericValueErrors::new("bad", "Parser::date()")));

    let mut presenter = RecordingPresenter::default();
    let mut sink = WriterSink::new(Vec::new(), config.log.clone());
    let disposition = settle(&agg, &mut presenter, &mut sink).expect("settle");

    assert_eq!(disposition, Disposition::Terminate);
    let banner = "-".repeat(50);
    assert!(presenter.shown[1].starts_with(&format!("{banner}\nNightly Pricing Error:\n")));

    let out = String::from_utf8(sink.into_inner()).expect("utf8");
    assert_eq!(out.lines().count(), 2);
    for line in out.lines() {
        let row: runlog::LogRow = serde_json::from_str(line).expect("json row");
        assert!(row.text.starts_with('('));
    }
}

#[test]
fn clean_run_settles_to_continue() {
    let mut presenter = RecordingPresenter::default();
    let mut sink = MemorySink::new();
    let d = settle(&quiet(), &mut presenter, &mut sink).expect("settle");
    assert_eq!(d, Disposition::Continue);

    let options = LogOptions {
        format: LogFormat::Tsv,
        include_header: false,
    };
    let mut writer = WriterSink::new(Vec::new(), options);
    let d = settle(&quiet(), &mut presenter, &mut writer).expect("settle");
    assert_eq!(d, Disposition::Continue);
    assert!(writer.into_inner().is_empty());
}
