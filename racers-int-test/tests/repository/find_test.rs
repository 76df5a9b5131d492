use racers::collection::{IdCodec, ObjectId};
use racers_int_test::test_util::{cleanup, create_test_context, insert_test_racers, run_test};

#[test]
fn test_find_by_id_returns_saved_racer() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 5)?;
            let repository = ctx.repository();

            for racer in &racers {
                let found = repository.find_by_id(racer.id().unwrap())?;
                assert_eq!(found.as_ref(), Some(racer));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_id_round_trips_id() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 1)?;
            let id = racers[0].id().unwrap();

            let native = IdCodec::to_storage(id)?;
            assert_eq!(IdCodec::to_external(&native), id);

            let found = ctx.repository().find_by_id(id)?.unwrap();
            assert_eq!(found.id(), Some(id));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_unknown_id_is_none() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 3)?;
            let unknown = ObjectId::new().to_hex();
            assert!(ctx.repository().find_by_id(&unknown)?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_after_destroy_is_none() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 2)?;
            let repository = ctx.repository();

            repository.destroy(&racers[0])?;
            assert!(repository.find_by_id(racers[0].id().unwrap())?.is_none());
            assert!(repository.find_by_id(racers[1].id().unwrap())?.is_some());
            Ok(())
        },
        cleanup,
    )
}
