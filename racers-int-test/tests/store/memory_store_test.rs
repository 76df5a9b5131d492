use racers::collection::{order_by, FindOptions, ObjectId};
use racers::common::{SortOrder, Value};
use racers::doc;
use racers::errors::ErrorKind;
use racers::filter::{all, Filter};
use racers::repository::RacerRepository;
use racers::store::memory::{InMemoryStore, InMemoryStoreConfig};
use racers::store::{DocumentStore, DocumentStoreProvider};
use racers_int_test::test_util::{cleanup, create_test_context, insert_test_racers, run_test};

#[test]
fn test_repository_over_generic_store_handle() {
    let store = DocumentStore::new(InMemoryStore::with_config(
        InMemoryStoreConfig::new().initial_capacity(16),
    ));
    let repository = RacerRepository::builder().open(store.as_ref()).unwrap();

    let mut racer = racers::Racer::from_external(&doc! { number: 3 });
    repository.save(&mut racer).unwrap();
    assert!(store.has_collection("racers"));
    assert_eq!(repository.count(None).unwrap(), 1);

    store.close().unwrap();
    assert!(store.is_closed());
    assert_eq!(
        repository.count(None).unwrap_err().kind(),
        &ErrorKind::StoreUnavailable
    );
}

#[test]
fn test_count_ignores_skip_and_limit() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 12)?;
            let collection = ctx.repository().collection().clone();

            let options = FindOptions::new()
                .sort_by(order_by("number", SortOrder::Descending))
                .skip(10)
                .limit(1);
            let mut cursor = collection.find(&all(), &options)?;
            assert_eq!(cursor.size(), 1);
            let last = cursor.first().unwrap()?;
            assert_eq!(last.get("number"), Some(&Value::I64(2)));

            assert_eq!(collection.count(&all())?, 12);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_never_changes_id() {
    run_test(
        create_test_context,
        |ctx| {
            let racers = insert_test_racers(&ctx, 1)?;
            let collection = ctx.repository().collection().clone();
            let id = ObjectId::parse_str(racers[0].id().unwrap())?;

            let mut patch = doc! { secs: 1 };
            patch.put("_id", ObjectId::new())?;
            let result = collection.update_one(&Filter::by_id(id), &patch)?;
            assert_eq!(result.affected_ids(), &vec![id]);

            assert_eq!(collection.count(&Filter::by_id(id))?, 1);
            assert_eq!(collection.count(&Filter::eq("secs", 1))?, 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_separate_stores_do_not_share_data() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_racers(&ctx, 3)?;
            let other = InMemoryStore::new();
            let repository = RacerRepository::builder().open(&other)?;
            assert_eq!(repository.count(None)?, 0);
            assert_eq!(ctx.repository().count(None)?, 3);
            assert_eq!(other.collection_names(), vec!["racers"]);
            Ok(())
        },
        cleanup,
    )
}
