use racers::doc;
use racers::repository::PageRequest;
use racers_int_test::test_util::{cleanup, create_test_context, random_racer, run_test};
use std::thread;

#[test]
fn test_repository_shared_across_threads() {
    run_test(
        create_test_context,
        |ctx| {
            let handles: Vec<_> = (0..4)
                .map(|worker| {
                    let repository = ctx.repository();
                    thread::spawn(move || {
                        for i in 0..25 {
                            let mut racer = random_racer(worker * 100 + i);
                            repository.save(&mut racer).unwrap();
                            repository.update(&mut racer, &doc! { secs: (i + 1) }).unwrap();
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            let repository = ctx.repository();
            assert_eq!(repository.count(None)?, 100);

            let page = repository.paginate(&PageRequest::new().page(1).per_page(100))?;
            assert_eq!(page.len(), 100);
            let numbers: Vec<i64> = page.iter().filter_map(|racer| racer.number).collect();
            let mut sorted = numbers.clone();
            sorted.sort();
            assert_eq!(numbers, sorted);
            assert!(page.iter().all(|racer| racer.secs.map_or(false, |secs| (1..=25).contains(&secs))));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_cloned_repositories_see_the_same_racers() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = ctx.repository();
            let reader = writer.clone();

            let mut racer = random_racer(7);
            writer.save(&mut racer)?;
            assert_eq!(reader.find_by_id(racer.id().unwrap())?, Some(racer.clone()));

            reader.destroy(&racer)?;
            assert!(writer.find_by_id(racer.id().unwrap())?.is_none());
            Ok(())
        },
        cleanup,
    )
}
