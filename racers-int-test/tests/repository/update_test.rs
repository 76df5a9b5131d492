use racers::collection::{FindOptions, IdCodec};
use racers::common::Value;
use racers::doc;
use racers::filter::Filter;
use racers_int_test::test_util::{cleanup, create_test_context, insert_test_racers, run_test};

#[test]
fn test_update_coerces_and_writes_only_given_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let mut racers = insert_test_racers(&ctx, 1)?;
            let racer = &mut racers[0];
            let last_name = racer.last_name.clone();
            let repository = ctx.repository();

            let params = doc! { number: "abc", secs: "120", first_name: "Jo" };
            let result = repository.update(racer, &params)?;
            assert_eq!(result.affected_count(), 1);

            assert_eq!(racer.number, Some(0));
            assert_eq!(racer.secs, Some(120));
            assert_eq!(racer.first_name.as_deref(), Some("Jo"));
            assert_eq!(racer.last_name, last_name);

            let id = IdCodec::to_storage(racer.id().unwrap())?;
            let mut cursor = repository
                .collection()
                .find(&Filter::by_id(id), &FindOptions::new())?;
            let stored = cursor.next().unwrap()?;
            assert_eq!(
                stored.fields(),
                vec!["number", "first_name", "last_name", "gender", "group", "secs", "_id"]
            );
            assert_eq!(stored.get("number"), Some(&Value::I64(0)));
            assert_eq!(stored.get("secs"), Some(&Value::I64(120)));
            assert_eq!(stored.get("first_name"), Some(&Value::from("Jo")));
            assert_eq!(stored.get("last_name").and_then(|v| v.as_string()), last_name.as_ref());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_ignores_unknown_and_id_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let mut racers = insert_test_racers(&ctx, 1)?;
            let racer = &mut racers[0];
            let id = racer.id().unwrap().to_string();
            let repository = ctx.repository();

            let params = doc! { id: "000000000000000000000000", password: "x", secs: 99.7 };
            repository.update(racer, &params)?;
            assert_eq!(racer.id(), Some(id.as_str()));

            let stored = repository.find_by_id(&id)?.unwrap();
            assert_eq!(stored.secs, Some(99));
            assert_eq!(stored.id(), Some(id.as_str()));
            assert_eq!(
                repository.collection().count(&Filter::eq("password", "x"))?,
                0
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_text_fields_from_numbers() {
    run_test(
        create_test_context,
        |ctx| {
            let mut racers = insert_test_racers(&ctx, 1)?;
            let racer = &mut racers[0];
            let repository = ctx.repository();

            repository.update(racer, &doc! { group: 40, gender: (Value::Null) })?;
            assert_eq!(racer.group.as_deref(), Some("40"));
            assert_eq!(racer.gender, None);

            let stored = repository.find_by_id(racer.id().unwrap())?.unwrap();
            assert_eq!(&stored, racer);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_leaves_other_racers_alone() {
    run_test(
        create_test_context,
        |ctx| {
            let mut racers = insert_test_racers(&ctx, 3)?;
            let repository = ctx.repository();

            repository.update(&mut racers[1], &doc! { secs: 1 })?;

            assert_eq!(repository.find_by_id(racers[0].id().unwrap())?.as_ref(), Some(&racers[0]));
            assert_eq!(repository.find_by_id(racers[2].id().unwrap())?.as_ref(), Some(&racers[2]));
            assert_eq!(repository.find_by_id(racers[1].id().unwrap())?.unwrap().secs, Some(1));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_non_ascii_digits_become_zero() {
    run_test(
        create_test_context,
        |ctx| {
            let mut racers = insert_test_racers(&ctx, 1)?;
            let racer = &mut racers[0];
            let repository = ctx.repository();

            repository.update(racer, &doc! { number: "\u{0663}", secs: "\u{FF11}\u{FF12}0" })?;
            assert_eq!(racer.number, Some(0));
            assert_eq!(racer.secs, Some(0));

            let stored = repository.find_by_id(racer.id().unwrap())?.unwrap();
            assert_eq!(stored.number, Some(0));
            assert_eq!(stored.secs, Some(0));
            Ok(())
        },
        cleanup,
    )
}
