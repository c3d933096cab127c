use chrono::{Datelike, Local};

/// Number of graduation years offered, counting back from the current one.
pub const GRADUATION_YEAR_SPAN: i32 = 50;

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Graduation years offered for selection, newest first.
pub fn graduation_years(current_year: i32) -> Vec<i32> {
    (0..GRADUATION_YEAR_SPAN)
        .map(|offset| current_year - offset)
        .collect()
}

/// Steps through `years` from `current` (a selected value or `""`).
///
/// An empty or unknown selection starts at the newest year when moving
/// forward and at the oldest when moving back. Wraps at both ends.
pub fn step_year(years: &[i32], current: &str, delta: isize) -> Option<i32> {
    if years.is_empty() {
        return None;
    }
    let len = years.len() as isize;
    let position = current
        .parse::<i32>()
        .ok()
        .and_then(|year| years.iter().position(|candidate| *candidate == year));
    let next = match position {
        Some(index) => (index as isize + delta).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    Some(years[next as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offers_fifty_years_newest_first() {
        let years = graduation_years(2026);
        assert_eq!(years.len(), 50);
        assert_eq!(years[0], 2026);
        assert_eq!(years[49], 1977);
    }

    #[test]
    fn step_from_empty_selection() {
        let years = graduation_years(2026);
        assert_eq!(step_year(&years, "", 1), Some(2026));
        assert_eq!(step_year(&years, "", -1), Some(1977));
    }

    #[test]
    fn step_wraps() {
        let years = graduation_years(2026);
        assert_eq!(step_year(&years, "2026", -1), Some(1977));
        assert_eq!(step_year(&years, "1977", 1), Some(2026));
        assert_eq!(step_year(&years, "2020", 1), Some(2019));
    }

    #[test]
    fn step_on_empty_set() {
        assert_eq!(step_year(&[], "2020", 1), None);
    }
}
