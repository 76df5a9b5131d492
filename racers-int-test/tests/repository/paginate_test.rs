use racers::doc;
use racers::repository::PageRequest;
use racers_int_test::test_util::{cleanup, create_test_context, insert_test_racers, run_test};

#[test]
fn test_paginate_middle_and_last_page() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 25)?;
            let repository = ctx.repository();

            let page = repository.paginate(&PageRequest::new().page(2).per_page(10))?;
            assert_eq!(page.len(), 10);
            assert_eq!(page.total(), 25);
            assert_eq!(page.page(), 2);
            assert_eq!(page.per_page(), 10);
            let numbers: Vec<i64> = page.iter().filter_map(|racer| racer.number).collect();
            assert_eq!(numbers, (11..=20).collect::<Vec<i64>>());

            let page = repository.paginate(&PageRequest::new().page(3).per_page(10))?;
            assert_eq!(page.len(), 5);
            assert_eq!(page.total(), 25);
            assert_eq!(page.next_page(), None);
            assert_eq!(page.total_pages(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_paginate_past_the_end() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 25)?;
            let page = ctx.repository().paginate(&PageRequest::new().page(4).per_page(10))?;
            assert!(page.is_empty());
            assert_eq!(page.total(), 25);
            assert!(page.is_out_of_bounds());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_paginate_defaults_to_thirty_per_page() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 45)?;
            let page = ctx.repository().paginate(&PageRequest::new())?;
            assert_eq!(page.page(), 1);
            assert_eq!(page.per_page(), 30);
            assert_eq!(page.len(), 30);
            assert_eq!(page.next_page(), Some(2));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_paginate_from_raw_params() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 40)?;
            let masters = racers
                .iter()
                .filter(|racer| racer.group.as_deref() == Some("masters"))
                .count() as u64;

            let params = doc! {
                group: "masters",
                page: "1",
                per_page: "5",
                sort: { secs: 1, number: 1 },
            };
            let page = ctx.repository().paginate(&PageRequest::from_params(&params))?;

            assert_eq!(page.total(), masters);
            assert_eq!(page.len() as u64, masters.min(5));
            assert!(page.iter().all(|racer| racer.group.as_deref() == Some("masters")));

            let secs: Vec<i64> = page.iter().filter_map(|racer| racer.secs).collect();
            let mut sorted = secs.clone();
            sorted.sort();
            assert_eq!(secs, sorted);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_paginate_clamps_page_and_size() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 3)?;
            let params = doc! { page: "zero", per_page: 0 };
            let page = ctx.repository().paginate(&PageRequest::from_params(&params))?;
            assert_eq!(page.page(), 1);
            assert_eq!(page.per_page(), 1);
            assert_eq!(page.len(), 1);
            assert_eq!(page.total(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_paginate_empty_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let page = ctx.repository().paginate(&PageRequest::new().page(1).per_page(10))?;
            assert!(page.is_empty());
            assert_eq!(page.total(), 0);
            assert_eq!(page.total_pages(), 0);
            assert!(!page.is_out_of_bounds());
            Ok(())
        },
        cleanup,
    )
}
