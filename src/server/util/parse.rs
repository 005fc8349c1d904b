use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a comma-separated list of resource ids from a path segment.
///
/// # Returns
/// - `Ok(Vec<Uuid>)` - Every segment parsed as a UUID
/// - `Err(AppError::BadRequest)` - At least one segment is not a valid UUID
pub fn parse_uuid_list(ids: &str) -> Result<Vec<Uuid>, AppError> {
    ids.split(',')
        .map(|id| {
            let trimmed = id.trim();
            trimmed.parse::<Uuid>().map_err(|_| {
                AppError::BadRequest(format!("{trimmed:?} is not a valid resource id"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_trimmed_comma_separated_list() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let parsed = parse_uuid_list(&format!("{first}, {second}")).unwrap();

        assert_eq!(parsed, vec![first, second]);
    }

    #[test]
    fn rejects_invalid_segments() {
        let result = parse_uuid_list("not-a-uuid");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
