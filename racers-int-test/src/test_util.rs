use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use racers::doc;
use racers::errors::RacerResult;
use racers::repository::RacerRepository;
use racers::store::memory::InMemoryStore;
use racers::Racer;
use rand::Rng;
use std::backtrace::Backtrace;
use std::time::Instant;

pub const GENDERS: [&str; 2] = ["F", "M"];
pub const GROUPS: [&str; 4] = ["juniors", "open", "masters", "veterans"];

/// Runs `test` between `before` and `after`.
///
/// `after` runs even when the test fails, so every context gets cleaned up.
/// A failure or panic anywhere fails the calling test with the error and the
/// backtrace captured at the start of the run.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> RacerResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> RacerResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> RacerResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();

    let result = std::panic::catch_unwind(|| {
        let backtrace = Backtrace::capture();
        match before() {
            Ok(ctx) => match test(ctx.clone()) {
                Ok(_) => match after(ctx) {
                    Ok(_) => Ok(()),
                    Err(e) => Err((format!("After run failed: {:?}", e), backtrace.to_string())),
                },
                Err(e) => {
                    let _ = after(ctx);
                    Err((format!("Test failed: {:?}", e), backtrace.to_string()))
                }
            },
            Err(e) => Err((format!("Before run failed: {:?}", e), backtrace.to_string())),
        }
    });

    let elapsed = start_time.elapsed();
    let (error, backtrace) = match result {
        Ok(Ok(_)) => return,
        Ok(Err((e, bt))) => (e, bt),
        Err(panic_err) => {
            let err_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            (format!("Panic: {}", err_msg), Backtrace::capture().to_string())
        }
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {:?}", elapsed);
    eprintln!("Error: {}", error);
    if !backtrace.is_empty() && !backtrace.contains("disabled") {
        eprintln!("\nBacktrace:\n{}", backtrace);
    }
    eprintln!("=====================================================\n");

    panic!("Test failed. Error: {}", error);
}

#[derive(Clone)]
pub struct TestContext {
    store: InMemoryStore,
    repository: RacerRepository,
}

impl TestContext {
    pub fn new(store: InMemoryStore, repository: RacerRepository) -> Self {
        Self { store, repository }
    }

    pub fn store(&self) -> InMemoryStore {
        self.store.clone()
    }

    pub fn repository(&self) -> RacerRepository {
        self.repository.clone()
    }
}

pub fn create_test_context() -> RacerResult<TestContext> {
    let store = InMemoryStore::new();
    let repository = RacerRepository::builder().open(&store)?;
    Ok(TestContext::new(store, repository))
}

pub fn cleanup(ctx: TestContext) -> RacerResult<()> {
    ctx.store().close()
}

/// A racer with the given number and made up names, gender, group and time.
pub fn random_racer(number: i64) -> Racer {
    let mut rng = rand::rng();
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let gender = GENDERS[rng.random_range(0..GENDERS.len())];
    let group = GROUPS[rng.random_range(0..GROUPS.len())];
    let secs: i64 = rng.random_range(1200..14400);

    Racer::from_external(&doc! {
        number: number,
        first_name: first_name,
        last_name: last_name,
        gender: gender,
        group: group,
        secs: secs,
    })
}

/// Saves `count` random racers numbered from 1 and returns them in order.
pub fn insert_test_racers(ctx: &TestContext, count: i64) -> RacerResult<Vec<Racer>> {
    let repository = ctx.repository();
    let mut racers = Vec::with_capacity(count.max(0) as usize);
    for number in 1..=count {
        let mut racer = random_racer(number);
        repository.save(&mut racer)?;
        racers.push(racer);
    }
    Ok(racers)
}
