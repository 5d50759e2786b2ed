//! Filter settings reducer.

use crate::models::{FilterSettings, SortBy};
use crate::store::Action;

/// Compute the next filter settings. Each filter action replaces exactly
/// one field; everything else passes through unchanged.
pub fn reduce(state: &FilterSettings, action: &Action) -> FilterSettings {
    match action {
        Action::SetTextFilter { text } => FilterSettings {
            text: text.clone(),
            ..state.clone()
        },
        Action::SortByDate => FilterSettings {
            sort_by: SortBy::Date,
            ..state.clone()
        },
        Action::SortByAmount => FilterSettings {
            sort_by: SortBy::Amount,
            ..state.clone()
        },
        Action::SetStartDate { start_date } => FilterSettings {
            start_date: *start_date,
            ..state.clone()
        },
        Action::SetEndDate { end_date } => FilterSettings {
            end_date: *end_date,
            ..state.clone()
        },
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_filter_replaces_text_only() {
        let state = FilterSettings {
            text: String::new(),
            sort_by: SortBy::Amount,
            start_date: Some(1),
            end_date: Some(2),
        };
        let next = reduce(&state, &Action::set_text_filter("rent"));
        assert_eq!(next.text, "rent");
        assert_eq!(next.sort_by, SortBy::Amount);
        assert_eq!(next.start_date, Some(1));
        assert_eq!(next.end_date, Some(2));
    }

    #[test]
    fn test_sort_toggles() {
        let state = FilterSettings::default();
        let by_amount = reduce(&state, &Action::SortByAmount);
        assert_eq!(by_amount.sort_by, SortBy::Amount);
        let by_date = reduce(&by_amount, &Action::SortByDate);
        assert_eq!(by_date.sort_by, SortBy::Date);
    }

    #[test]
    fn test_date_bounds_can_be_set_and_cleared() {
        let state = FilterSettings::default();
        let bounded = reduce(
            &reduce(&state, &Action::set_start_date(Some(0))),
            &Action::set_end_date(Some(999)),
        );
        assert_eq!(bounded.start_date, Some(0));
        assert_eq!(bounded.end_date, Some(999));

        let cleared = reduce(&bounded, &Action::set_start_date(None));
        assert_eq!(cleared.start_date, None);
        assert_eq!(cleared.end_date, Some(999));
    }

    #[test]
    fn test_unrelated_action_passes_through() {
        let state = FilterSettings {
            text: "x".to_string(),
            ..FilterSettings::default()
        };
        assert_eq!(reduce(&state, &Action::login("abc")), state);
    }
}
