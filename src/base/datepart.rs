/// Width of a time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Datepart {
    Year,
    Month,
    #[default]
    Day,
}
