//! # Contract Tier Tests (T0-T3)
//!
//! If ANY tier fails, the menu core is INVALID.
//!
//! ## Tiers
//! - T0: Add Validity
//! - T1: Positional Removal
//! - T2: Course Averages
//! - T3: Course Filtering

use menu_core::{
    Course, CourseFilter, MenuCandidate, MenuError, MenuItem, MenuStore, ValidationError,
    average_price, filter_by_course,
};

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(MenuItem::dish_name).collect()
}

// =============================================================================
// TIER T0: ADD VALIDITY
// =============================================================================

mod t0_add_validity {
    use super::*;

    /// T0.1: A valid candidate is trimmed and appended.
    #[test]
    fn trimmed_item_appended() {
        let mut store = MenuStore::seeded();
        store
            .add(&MenuCandidate::new(" Soup ", " Nice ", "Starter", "45"))
            .expect("add");

        assert_eq!(store.len(), 4);
        let last = &store.snapshot()[3];
        assert_eq!(last.dish_name(), "Soup");
        assert_eq!(last.description(), "Nice");
        assert_eq!(last.course(), Course::Starter);
        assert_eq!(last.price(), 45.0);
    }

    /// T0.2: Whitespace-only text fields are rejected.
    #[test]
    fn blank_text_rejected() {
        let mut store = MenuStore::new();

        let result = store.add(&MenuCandidate::new("   ", "Nice", "Main", "10"));
        assert_eq!(
            result.err(),
            Some(MenuError::Validation(ValidationError::EmptyDishName))
        );

        let result = store.add(&MenuCandidate::new("Soup", "\t\n", "Main", "10"));
        assert_eq!(
            result.err(),
            Some(MenuError::Validation(ValidationError::EmptyDescription))
        );

        assert!(store.is_empty());
    }

    /// T0.3: A missing course selection is rejected.
    #[test]
    fn missing_course_rejected() {
        let mut store = MenuStore::new();
        let result = store.add(&MenuCandidate::new("Soup", "Nice", "", "10"));

        assert_eq!(
            result.err(),
            Some(MenuError::Validation(ValidationError::MissingCourse))
        );
        assert!(store.is_empty());
    }

    /// T0.4: An omitted price is distinguished from a malformed one.
    #[test]
    fn omitted_and_malformed_price_distinguished() {
        let mut store = MenuStore::new();

        let omitted = store
            .add(&MenuCandidate::new("Soup", "Nice", "Main", ""))
            .err();
        let malformed = store
            .add(&MenuCandidate::new("Soup", "Nice", "Main", "cheap"))
            .err();
        let negative = store
            .add(&MenuCandidate::new("Soup", "Nice", "Main", "-5"))
            .err();

        assert_eq!(
            omitted,
            Some(MenuError::Validation(ValidationError::MissingPrice))
        );
        assert_eq!(
            malformed,
            Some(MenuError::Validation(ValidationError::InvalidPrice(
                "cheap".to_string()
            )))
        );
        assert_eq!(
            negative,
            Some(MenuError::Validation(ValidationError::NonPositivePrice(
                -5.0
            )))
        );
        assert!(store.is_empty());
    }
}

// =============================================================================
// TIER T1: POSITIONAL REMOVAL
// =============================================================================

mod t1_positional_removal {
    use super::*;

    /// T1.1: Positions N and -1 are out of range for a store of length N.
    #[test]
    fn bounds_rejected() {
        let mut store = MenuStore::seeded();
        let n = store.len() as i64;

        assert!(matches!(
            store.remove(n),
            Err(MenuError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            store.remove(-1),
            Err(MenuError::IndexOutOfRange { .. })
        ));
        assert_eq!(store.len(), 3);
    }

    /// T1.2: Removing position k deletes exactly that item and closes the gap.
    #[test]
    fn removal_closes_gap() {
        for k in 0..3 {
            let mut store = MenuStore::seeded();
            let mut expected = names(MenuStore::seeded().snapshot())
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>();
            let expected_removed = expected.remove(k);

            let removed = store.remove(k as i64).expect("remove");

            assert_eq!(removed.dish_name(), expected_removed);
            assert_eq!(names(store.snapshot()), expected);
        }
    }

    /// T1.3: Removing from an empty store always fails.
    #[test]
    fn empty_store_rejects_removal() {
        let mut store = MenuStore::new();
        assert_eq!(
            store.remove(0),
            Err(MenuError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}

// =============================================================================
// TIER T2: COURSE AVERAGES
// =============================================================================

mod t2_course_averages {
    use super::*;

    /// T2.1: A course with no items averages 0.00.
    #[test]
    fn empty_course_is_zero() {
        let mut store = MenuStore::seeded();
        store.remove(2).expect("remove dessert");

        assert_eq!(average_price(store.snapshot(), Course::Dessert), "0.00");
    }

    /// T2.2: One item per course averages to that item's price.
    #[test]
    fn single_item_courses() {
        let store = MenuStore::seeded();

        assert_eq!(average_price(store.snapshot(), Course::Starter), "45.00");
        assert_eq!(average_price(store.snapshot(), Course::Main), "120.00");
        assert_eq!(average_price(store.snapshot(), Course::Dessert), "55.00");
    }

    /// T2.3: A second starter moves the starter average.
    #[test]
    fn second_item_updates_average() {
        let mut store = MenuStore::seeded();
        store
            .add(&MenuCandidate::new("Bread", "Warm", "Starter", "15"))
            .expect("add");

        assert_eq!(average_price(store.snapshot(), Course::Starter), "30.00");
        assert_eq!(average_price(store.snapshot(), Course::Main), "120.00");
    }
}

// =============================================================================
// TIER T3: COURSE FILTERING
// =============================================================================

mod t3_course_filtering {
    use super::*;

    /// T3.1: "All" is the identity projection.
    #[test]
    fn all_is_identity() {
        let store = MenuStore::seeded();
        assert_eq!(
            filter_by_course(store.snapshot(), CourseFilter::All),
            store.snapshot()
        );
    }

    /// T3.2: Filtering twice by the same course changes nothing.
    #[test]
    fn filter_is_idempotent() {
        let mut store = MenuStore::seeded();
        store
            .add(&MenuCandidate::new("Steak", "Rare", "Main", "180"))
            .expect("add");

        let once = filter_by_course(store.snapshot(), CourseFilter::Only(Course::Main));
        let twice = filter_by_course(&once, CourseFilter::Only(Course::Main));

        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["Grilled Chicken", "Steak"]);
    }

    /// T3.3: A course with no items filters to nothing.
    #[test]
    fn missing_course_filters_empty() {
        let store = MenuStore::new();
        assert!(filter_by_course(store.snapshot(), Course::Dessert.into()).is_empty());
    }
}
