use racers::collection::IdCodec;
use racers::doc;
use racers::filter::Filter;
use racers::Racer;
use racers_int_test::test_util::{cleanup, create_test_context, insert_test_racers, random_racer, run_test};

#[test]
fn test_save_populates_id() {
    run_test(
        create_test_context,
        |ctx| {
            let mut racer = random_racer(1);
            assert!(!racer.is_persisted());

            ctx.repository().save(&mut racer)?;
            assert!(racer.is_persisted());
            assert!(IdCodec::is_valid(racer.id().unwrap()));
            assert!(racer.created_at().is_none());
            assert!(racer.updated_at().is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_save_twice_creates_two_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut racer = Racer::from_external(&doc! { number: 1 });
            repository.save(&mut racer)?;
            let first_id = racer.id().unwrap().to_string();

            repository.save(&mut racer)?;
            let second_id = racer.id().unwrap().to_string();

            assert_ne!(first_id, second_id);
            assert_eq!(repository.count(None)?, 2);
            // the second document also carries the first id under `id`
            assert_eq!(
                repository.collection().count(&Filter::eq("id", first_id.as_str()))?,
                1
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_saved_ids_are_unique() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 200)?;
            let mut ids: Vec<&str> = racers.iter().filter_map(|racer| racer.id()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 200);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_destroy_removes_only_that_racer() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 3)?;
            let repository = ctx.repository();

            let result = repository.destroy(&racers[1])?;
            assert_eq!(result.affected_count(), 1);
            assert_eq!(repository.count(None)?, 2);
            assert!(racers[1].is_persisted());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_destroy_missing_racer_is_silent() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 1)?;
            let repository = ctx.repository();

            repository.destroy(&racers[0])?;
            let result = repository.destroy(&racers[0])?;
            assert!(result.is_noop());
            assert_eq!(repository.count(None)?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_save_racer_built_from_form_text() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut racer =
                Racer::from_external(&doc! { number: "12", secs: "3600", first_name: "Ada" });
            repository.save(&mut racer)?;

            let stored = repository.find_by_id(racer.id().unwrap())?.unwrap();
            assert_eq!(stored.number, Some(12));
            assert_eq!(stored.secs, Some(3600));
            assert_eq!(stored.first_name.as_deref(), Some("Ada"));
            Ok(())
        },
        cleanup,
    )
}
