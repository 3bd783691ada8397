use crate::base;

/// Transaction filters shared by every report command. All of them are
/// combined, an omitted filter lets everything through.
#[derive(clap::Args)]
pub struct FilterOpts {
    /// Only include transactions dated in this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only include transactions dated in this month
    ///
    /// Either a number from 1 to 12 or a month name, in Portuguese or
    /// English, full or abbreviated. Combine with '--year' to pick a single
    /// month.
    #[arg(short, long, value_parser = base::locale::parse_month)]
    pub month: Option<time::Month>,

    /// Only include transactions in this week of the month
    ///
    /// Week N covers days 7N-6 to 7N, so week 5 holds days 29 to 31.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub week: Option<u8>,

    /// Only include transactions of this type ('entrada' or 'saída')
    #[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_kind)]
    pub kind: Option<base::Kind>,

    /// Only include transactions in this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only include transactions in this subcategory (exact match)
    #[arg(short, long)]
    pub subcategory: Option<String>,
}

fn parse_kind(s: &str) -> Result<base::Kind, String> {
    base::Kind::recognize(s).ok_or_else(|| format!("'{}' is not a transaction type", s))
}

impl FilterOpts {
    pub fn to_selection(&self) -> base::Selection {
        base::Selection {
            year: self.year,
            month: self.month,
            week: self.week,
            kind: self.kind,
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
        }
    }
}
