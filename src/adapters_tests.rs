//! Tests for the shared scalar adapters

#[cfg(test)]
mod tests {
    use crate::adapters::*;
    use serde_json::json;

    #[test]
    fn test_five_star_rating_halves_ten_point_scale() {
        assert_eq!(five_star_rating(&json!(10)), json!(5.0));
        assert_eq!(five_star_rating(&json!(8.0)), json!(4.0));
        assert_eq!(five_star_rating(&json!(0)), json!(0.0));
    }

    #[test]
    fn test_five_star_rating_rounds_to_half_star() {
        assert_eq!(five_star_rating(&json!(8.7)), json!(4.5));
        assert_eq!(five_star_rating(&json!(7.2)), json!(3.5));
    }

    #[test]
    fn test_five_star_rating_accepts_string() {
        assert_eq!(five_star_rating(&json!("6")), json!(3.0));
    }

    #[test]
    fn test_five_star_rating_clamps() {
        assert_eq!(five_star_rating(&json!(14)), json!(5.0));
        assert_eq!(five_star_rating(&json!(-3)), json!(0.0));
    }

    #[test]
    fn test_certificate_normalizes_case_and_whitespace() {
        assert_eq!(certificate(&json!(" pg ")), json!("PG"));
        assert_eq!(certificate(&json!("15")), json!("15"));
        assert_eq!(certificate(&json!(18)), json!("18"));
    }

    #[test]
    fn test_certificate_placeholder_is_empty() {
        assert_eq!(certificate(&json!("--")), json!(""));
        assert_eq!(certificate(&json!("")), json!(""));
    }

    #[test]
    fn test_duration_formats_minutes() {
        assert_eq!(duration(&json!(2700)), json!("45m"));
        assert_eq!(duration(&json!(5100)), json!("1h 25m"));
        assert_eq!(duration(&json!("3600")), json!("1h 0m"));
    }

    #[test]
    fn test_duration_rounds_partial_minutes_up() {
        assert_eq!(duration(&json!(61)), json!("2m"));
    }

    #[test]
    fn test_duration_invalid_passes_through() {
        assert_eq!(duration(&json!("n/a")), json!("n/a"));
    }

    #[test]
    fn test_synopsis_trims() {
        assert_eq!(synopsis(&json!("  A quiet drama.\n")), json!("A quiet drama."));
        assert_eq!(synopsis(&json!(null)), json!(""));
    }
}
