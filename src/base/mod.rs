pub mod aggregate;
pub mod barchart;
pub mod cents;
pub mod charset;
pub mod columns;
pub mod config;
pub mod dashboard;
pub mod date;
pub mod datepart;
pub mod fs;
pub mod ledger;
pub mod locale;
pub mod monthlytable;
pub mod report;
pub mod selection;
pub mod source;
pub mod totalsprinter;
pub mod transaction;
pub mod util;

pub use aggregate::Aggregate;
pub use cents::Cents;
pub use charset::Charset;
pub use columns::Columns;
pub use config::Config;
pub use dashboard::Dashboard;
pub use dashboard::LoadError;
pub use dashboard::Reports;
pub use date::Date;
pub use datepart::Datepart;
pub use fs::Cache;
pub use fs::Fs;
pub use ledger::Choices;
pub use ledger::Ledger;
pub use ledger::ParseError;
pub use report::AggregateResult;
pub use report::MonthlyTotals;
pub use report::Series;
pub use report::SeriesKind;
pub use selection::Selection;
pub use source::Cached;
pub use source::Fetch;
pub use source::FetchError;
pub use source::Source;
pub use transaction::Kind;
pub use transaction::Totals;
pub use transaction::Transaction;
