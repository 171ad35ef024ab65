use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const ACCEPTED_LANGUAGES: [&str; 2] = ["french", "english"];
pub(crate) const ISBN_LENGTH: (usize, usize) = (10, 13);
pub(crate) const YEAR_RANGE: (i64, i64) = (-9999, 9999);

type Rule = fn(&BookDto) -> LibraryResult<()>;

// Rules run in this order and the first failure is reported.
const BOOK_RULES: [Rule; 4] = [check_language, check_isbn, check_year, check_title];

pub(crate) fn validate_book(book: &BookDto) -> LibraryResult<()> {
    BOOK_RULES.iter().try_for_each(|rule| rule(book))
}

fn invalid(field: &str, message: String) -> LibraryError {
    LibraryError::validation(message.as_str(), Some(field.to_string()))
}

fn check_language(book: &BookDto) -> LibraryResult<()> {
    match &book.language {
        Some(language) if !ACCEPTED_LANGUAGES.iter().any(|l| l.eq_ignore_ascii_case(language)) => {
            Err(invalid("language", format!("language {:?} must be one of {:?}", language, ACCEPTED_LANGUAGES)))
        }
        _ => Ok(()),
    }
}

fn check_isbn(book: &BookDto) -> LibraryResult<()> {
    let digits = book.isbn.to_string().len();
    if digits < ISBN_LENGTH.0 || digits > ISBN_LENGTH.1 {
        return Err(invalid("isbn", format!("isbn {} must have between {} and {} digits",
                                           book.isbn, ISBN_LENGTH.0, ISBN_LENGTH.1)));
    }
    Ok(())
}

fn check_year(book: &BookDto) -> LibraryResult<()> {
    if book.year < YEAR_RANGE.0 || book.year > YEAR_RANGE.1 {
        return Err(invalid("year", format!("year {} must be between {} and {}",
                                           book.year, YEAR_RANGE.0, YEAR_RANGE.1)));
    }
    Ok(())
}

fn check_title(book: &BookDto) -> LibraryResult<()> {
    match book.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => Ok(()),
        _ => Err(invalid("title", "title must not be blank".to_string())),
    }
}
