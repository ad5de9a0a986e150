//! Property checks for route lookup and reverse construction.

use proptest::prelude::*;
use spa_router::routing::Params;

mod common;

fn path_like() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just("rooms".to_string()),
        Just("ROOMS".to_string()),
        Just("users".to_string()),
        Just("members".to_string()),
        Just("".to_string()),
        Just("%2F".to_string()),
        "[a-z0-9%]{1,6}",
    ];
    (prop::collection::vec(segment, 0..5), prop::option::of("[a-z=&]{0,8}")).prop_map(
        |(segments, query)| {
            let mut path = format!("/{}", segments.join("/"));
            if let Some(q) = query {
                path.push('?');
                path.push_str(&q);
            }
            path
        },
    )
}

proptest! {
    #[test]
    fn prop_lookup_is_total_and_deterministic(location in prop_oneof![".*", path_like()]) {
        let table = common::chat_table();
        let first = table.match_location(&location);
        let second = table.match_location(&location);
        prop_assert_eq!(&first, &second);

        // A match reverses to a location that matches the same entry again
        if let Some(m) = first {
            let rebuilt = table.reverse(&m.entry.name, &m.params).unwrap();
            let again = table.match_location(&rebuilt).unwrap();
            prop_assert_eq!(&again.entry.name, &m.entry.name);
            prop_assert_eq!(again.params, m.params);
        }
    }

    #[test]
    fn prop_reverse_round_trip(room in ".{1,16}", member in ".{1,16}") {
        let table = common::chat_table();
        let params: Params = [
            ("room".to_string(), room),
            ("member".to_string(), member),
        ]
        .into_iter()
        .collect();

        let location = table.reverse("Member", &params).unwrap();
        let m = table.match_location(&location).unwrap();
        prop_assert_eq!(m.entry.name.as_str(), "Member");
        prop_assert_eq!(m.params, params);
    }

    #[test]
    fn prop_single_param_round_trip(user in ".{1,24}") {
        let table = common::chat_table();
        let params: Params = [("user".to_string(), user)].into_iter().collect();

        let location = table.reverse("User", &params).unwrap();
        let m = table.match_location(&location).unwrap();
        prop_assert_eq!(m.entry.name.as_str(), "User");
        prop_assert_eq!(m.params, params);
    }
}
