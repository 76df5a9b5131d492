use racers::common::Value;
use racers::doc;
use racers::Racer;
use racers_int_test::test_util::{cleanup, create_test_context, insert_test_racers, run_test};

fn racers_of(cursor: racers::common::DocumentCursor) -> Vec<Racer> {
    cursor
        .map(|document| Racer::from_storage(&document.unwrap()))
        .collect()
}

#[test]
fn test_list_defaults_to_number_order() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            for number in [5, 3, 4, 1, 2] {
                let mut racer = Racer::from_external(&doc! { number: number });
                repository.save(&mut racer)?;
            }

            let numbers: Vec<i64> = racers_of(repository.list(None, None, 0, None)?)
                .into_iter()
                .filter_map(|racer| racer.number)
                .collect();
            assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_multi_key_sort_keeps_key_order() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            for (number, group, secs) in [
                (1, "open", 300),
                (2, "masters", 200),
                (3, "open", 100),
                (4, "masters", 400),
            ] {
                let mut racer = Racer::from_external(&doc! { number: number, group: group, secs: secs });
                repository.save(&mut racer)?;
            }

            let by_group_then_secs = doc! { group: 1, ignored: 1, secs: (-1) };
            let numbers: Vec<i64> = racers_of(repository.list(None, Some(&by_group_then_secs), 0, None)?)
                .into_iter()
                .filter_map(|racer| racer.number)
                .collect();
            assert_eq!(numbers, vec![4, 2, 1, 3]);

            let by_secs_then_group = doc! { secs: (-1), group: 1 };
            let numbers: Vec<i64> = racers_of(repository.list(None, Some(&by_secs_then_group), 0, None)?)
                .into_iter()
                .filter_map(|racer| racer.number)
                .collect();
            assert_eq!(numbers, vec![4, 1, 2, 3]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_filter_ignores_unknown_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            insert_test_racers(&ctx, 20)?;

            let everything = repository.list(Some(&doc! { password: "x", page: 2 }), None, 0, None)?;
            assert_eq!(everything.count(), 20);

            let women = repository.list(Some(&doc! { gender: "F" }), None, 0, None)?;
            let women = racers_of(women);
            assert_eq!(women.len() as u64, repository.count(Some(&doc! { gender: "F" }))?);
            assert!(women.iter().all(|racer| racer.gender.as_deref() == Some("F")));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_offset_and_limit() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            insert_test_racers(&ctx, 10)?;

            let numbers: Vec<i64> = racers_of(repository.list(None, None, 7, None)?)
                .into_iter()
                .filter_map(|racer| racer.number)
                .collect();
            assert_eq!(numbers, vec![8, 9, 10]);

            let numbers: Vec<i64> = racers_of(repository.list(None, None, 2, Some(3))?)
                .into_iter()
                .filter_map(|racer| racer.number)
                .collect();
            assert_eq!(numbers, vec![3, 4, 5]);

            assert_eq!(repository.list(None, None, 50, Some(3))?.count(), 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_returns_raw_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 1)?;
            let mut cursor = ctx.repository().list(None, None, 0, None)?;
            let document = cursor.next().unwrap()?;

            assert_eq!(
                document.id().map(|id| id.to_hex()).as_deref(),
                racers[0].id()
            );
            assert_eq!(document.get("number"), Some(&Value::I64(1)));
            Ok(())
        },
        cleanup,
    )
}
