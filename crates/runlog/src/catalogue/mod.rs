//! The concrete error kinds.
//!
//! Which severities may carry which kind is decided in `fatal`, `semi_fatal` and `non_fatal`;
//! the kinds themselves only know how to hold and print their records.
mod files;
mod folders;
mod reference_data;
mod reports;
mod values;

pub use files::{
    FailedToGenerateFiles, FileFormatIssues, FilesInUse, MissingConfigFiles, MissingInputFiles,
};
pub use folders::MissingFolders;
pub use reference_data::{MissingCalibers, MissingCurves, MissingInflationIndices};
pub use reports::{FailedToCreateSheets, FailedToGenerateReports};
pub use values::GenericValueErrors;

/// One container of every kind, in [`runlog_core::KindTag::ALL`] order.
#[cfg(test)]
pub(crate) fn samples() -> Vec<crate::container::ContainerKind> {
    use chrono::NaiveDate;

    let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
    vec![
        FilesInUse::new("in.csv", r"C:\in\in.csv", "Loader::open()").into(),
        FileFormatIssues::new("in.csv", r"C:\in\in.csv", "bad header", "Loader::parse()").into(),
        MissingFolders::new(r"C:\out\", "Setup::check()", "").into(),
        MissingConfigFiles::new("app.toml", r"C:\cfg\app.toml", "Setup::config()", "").into(),
        MissingInputFiles::new("rates.csv", r"C:\in\rates.csv", "Loader::open()", "").into(),
        FailedToGenerateReports::new("Daily", "Reports::run()", "").into(),
        FailedToCreateSheets::new("Summary", "Doc::build()", "Book.xlsx", "").into(),
        FailedToGenerateFiles::new("out.csv", r"C:\out\out.csv", "Writer::emit()", "").into(),
        GenericValueErrors::new("Cannot convert date.", "Parser::date()").into(),
        MissingCalibers::new("CAL-1", "Pricing::lookup()", "positions.csv").into(),
        MissingCurves::new("USD.OIS", "Curves::load()", r"\\prod\curves", date).into(),
        MissingInflationIndices::new("CPI", "Infl::load()", "infl.csv", Some(date)).into(),
    ]
}
