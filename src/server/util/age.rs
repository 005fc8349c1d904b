use chrono::{Datelike, NaiveDate, Utc};

/// Computes an author's age in whole years.
///
/// A living author's age is taken against today's date; a deceased author's
/// against their date of death. The year difference is reduced by one when
/// the birthday has not yet occurred in the reference year.
pub fn current_age(date_of_birth: NaiveDate, date_of_death: Option<NaiveDate>) -> i32 {
    let reference = date_of_death.unwrap_or_else(|| Utc::now().date_naive());

    let mut age = reference.year() - date_of_birth.year();
    if (reference.month(), reference.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }

    age
}
