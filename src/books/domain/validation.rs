use std::ops::RangeInclusive;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const TITLE_MIN_CHARS: usize = 3;
pub(crate) const AUTHOR_MIN_CHARS: usize = 1;
pub(crate) const DESCRIPTION_CHARS: RangeInclusive<usize> = 1..=100;
pub(crate) const RATING_RANGE: RangeInclusive<i64> = 1..=5;
pub(crate) const PUBLISHED_DATE_RANGE: RangeInclusive<i64> = 2000..=2030;

fn invalid(field: &str, message: String) -> LibraryError {
    LibraryError::validation(message.as_str(), Some(field.to_string()))
}

pub(crate) fn validate_book_id(id: i64) -> LibraryResult<i64> {
    if id > 0 {
        Ok(id)
    } else {
        Err(invalid("book_id", format!("book_id must be greater than 0 but was {}", id)))
    }
}

pub(crate) fn parse_book_id(raw: &str) -> LibraryResult<i64> {
    let id = raw.parse::<i64>()
        .map_err(|_| invalid("book_id", format!("book_id must be an integer but was {:?}", raw)))?;
    validate_book_id(id)
}

pub(crate) fn validate_rating(rating: i64) -> LibraryResult<i64> {
    validate_range("rating", rating, &RATING_RANGE)
}

pub(crate) fn validate_published_date(published_date: i64) -> LibraryResult<i64> {
    validate_range("published_date", published_date, &PUBLISHED_DATE_RANGE)
}

// absent parameters pass through as None, present ones must parse and satisfy the validator
pub(crate) fn parse_query_param<F>(field: &str, raw: Option<&String>, validator: F) -> LibraryResult<Option<i64>>
    where F: Fn(i64) -> LibraryResult<i64> {
    match raw {
        None => Ok(None),
        Some(raw) => {
            let value = raw.parse::<i64>()
                .map_err(|_| invalid(field, format!("{} must be an integer but was {:?}", field, raw)))?;
            validator(value).map(Some)
        }
    }
}

pub(crate) fn validate_text(field: &str, value: &str, min_chars: usize, max_chars: Option<usize>) -> LibraryResult<()> {
    let len = value.chars().count();
    if len < min_chars {
        return Err(invalid(field, format!("{} must have at least {} characters", field, min_chars)));
    }
    if let Some(max_chars) = max_chars {
        if len > max_chars {
            return Err(invalid(field, format!("{} must have at most {} characters", field, max_chars)));
        }
    }
    Ok(())
}

fn validate_range(field: &str, value: i64, range: &RangeInclusive<i64>) -> LibraryResult<i64> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(invalid(field, format!("{} must be between {} and {} but was {}",
                                   field, range.start(), range.end(), value)))
    }
}
