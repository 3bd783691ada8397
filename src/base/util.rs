pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Number of terminal columns taken by `s`, assuming one column per char.
/// Labels and money strings are accented latin text at worst, so counting
/// chars instead of bytes is enough.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}

/// Writes `s` right-aligned in a field of `width` columns.
pub fn write_right(w: &mut impl std::fmt::Write, s: &str, width: usize) -> std::fmt::Result {
    for _ in charlen(s)..width {
        w.write_char(' ')?;
    }
    w.write_str(s)
}
