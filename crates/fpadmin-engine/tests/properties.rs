use chrono::NaiveDate;
use fpadmin_engine::*;
use fpadmin_types::*;
use proptest::prelude::*;
use std::num::NonZeroUsize;

const NAMES: &[&str] = &["Aoki", "Baba", "Chiba", "aoki", "Doi"];
const STATUSES: &[VerificationStatus] =
    &[VerificationStatus::Verified, VerificationStatus::Unverified];

fn arb_users() -> impl Strategy<Value = Vec<User>> {
    proptest::collection::vec(
        (0..NAMES.len(), 0..STATUSES.len(), 0..400i64, any::<bool>()),
        0..40,
    )
    .prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, status, offset, is_new))| User {
                id: UserId::new(format_id("U", i as u64 + 1)),
                name: NAMES[name].to_string(),
                furigana: String::new(),
                email: format!("user{}@example.com", i),
                phone: None,
                birth_date: None,
                prefecture: None,
                consultation_content: None,
                line_status: None,
                last_login: (i % 3 == 0).then(|| base + chrono::Duration::days(offset / 2)),
                registration_date: base + chrono::Duration::days(offset),
                verification_status: STATUSES[status],
                partner_id: None,
                is_new,
            })
            .collect()
    })
}

fn arb_filters() -> impl Strategy<Value = FilterSet<UserField>> {
    (
        proptest::option::of(0..NAMES.len()),
        proptest::option::of(0..STATUSES.len()),
        proptest::option::of(0..400i64),
    )
        .prop_map(|(search, status, since)| {
            let mut filters = FilterSet::new();
            if let Some(i) = search {
                filters.set_search(NAMES[i]);
            }
            if let Some(i) = status {
                filters.set_selection(
                    UserField::VerificationStatus,
                    Selection::Only(STATUSES[i].key().to_string()),
                );
            }
            if let Some(days) = since {
                let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(days);
                filters.set_date_range(Some(DateRange {
                    field: UserField::RegistrationDate,
                    from: Some(from.to_string()),
                    to: None,
                }));
            }
            filters
        })
}

fn arb_sort() -> impl Strategy<Value = SortState<UserField>> {
    (0..User::SORTABLE.len(), any::<bool>()).prop_map(|(i, asc)| {
        let direction = if asc {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        SortState::new(User::SORTABLE[i], direction)
    })
}

fn ids(records: &[&User]) -> Vec<String> {
    records.iter().map(|u| u.id.to_string()).collect()
}

proptest! {
    #[test]
    fn prop_filter_is_exact_subset(users in arb_users(), filters in arb_filters()) {
        let kept = filters.apply(&users, &Detached);

        // Every kept record satisfies the predicates, every dropped one fails them
        for user in &users {
            let is_kept = kept.iter().any(|k| k.id == user.id);
            prop_assert_eq!(is_kept, filters.matches(user, &Detached));
        }
        prop_assert!(kept.len() <= users.len());
    }

    #[test]
    fn prop_filter_is_idempotent(users in arb_users(), filters in arb_filters()) {
        let once: Vec<User> = filters.apply(&users, &Detached).into_iter().cloned().collect();
        let twice = filters.apply(&once, &Detached);
        prop_assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn prop_sort_is_monotonic_permutation(users in arb_users(), sort in arb_sort()) {
        let mut sorted: Vec<&User> = users.iter().collect();
        sort_records(&mut sorted, &sort, &Detached);

        let mut before = ids(&users.iter().collect::<Vec<_>>());
        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        for pair in sorted.windows(2) {
            let ord = compare_values(
                &pair[0].field(sort.key, &Detached),
                &pair[1].field(sort.key, &Detached),
            );
            let ord = match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            prop_assert!(ord != std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn prop_double_toggle_restores_order(users in arb_users(), sort in arb_sort()) {
        let mut first: Vec<&User> = users.iter().collect();
        sort_records(&mut first, &sort, &Detached);

        let mut toggled = sort;
        toggled.select(sort.key, SortDirection::Descending);
        toggled.select(sort.key, SortDirection::Descending);

        let mut second: Vec<&User> = users.iter().collect();
        sort_records(&mut second, &toggled, &Detached);
        prop_assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn prop_pages_reconstruct_sorted_list(
        users in arb_users(),
        sort in arb_sort(),
        page_size in 1..12usize,
    ) {
        let size = NonZeroUsize::new(page_size).unwrap();
        let filters = FilterSet::new();

        let mut sorted: Vec<&User> = users.iter().collect();
        sort_records(&mut sorted, &sort, &Detached);

        let first = query(&users, &filters, &sort, 1, size, &Detached);
        prop_assert_eq!(first.page_count, users.len().div_ceil(page_size));
        prop_assert_eq!(first.is_empty_state(), users.is_empty());

        let mut rebuilt = Vec::new();
        for page in 1..=first.page_count {
            rebuilt.extend(query(&users, &filters, &sort, page, size, &Detached).items);
        }
        prop_assert_eq!(ids(&rebuilt), ids(&sorted));
    }
}
