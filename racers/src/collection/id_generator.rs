use crate::collection::ObjectId;
use crate::common::OBJECT_ID_LEN;
use chrono::Utc;
use log::{info, warn};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

pub(crate) static ID_GENERATOR: Lazy<ObjectIdGenerator> = Lazy::new(ObjectIdGenerator::new);

/// Generates [ObjectId]s: seconds timestamp, process-unique bytes, counter.
pub(crate) struct ObjectIdGenerator {
    process_unique: [u8; 5],
    counter: AtomicU32,
    mutex: Mutex<()>,
}

impl ObjectIdGenerator {
    pub fn new() -> Self {
        let process_unique = Self::process_unique();
        let counter = OsRng.gen_range(0..=COUNTER_MASK);

        info!(
            "Initialized object id generator with process id {}",
            hex::encode(process_unique)
        );

        ObjectIdGenerator {
            process_unique,
            counter: AtomicU32::new(counter),
            mutex: Mutex::new(()),
        }
    }

    pub fn next_id(&self) -> ObjectId {
        // timestamp and counter must be read together
        let _lock = match self.mutex.lock() {
            Ok(lock) => lock,
            Err(poisoned) => {
                warn!("Object id generator lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };

        let timestamp = Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;
        let counter = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;
        drop(_lock);

        Self::compose(timestamp, self.process_unique, counter)
    }

    fn compose(timestamp: u32, process_unique: [u8; 5], counter: u32) -> ObjectId {
        let mut bytes = [0u8; OBJECT_ID_LEN];
        bytes[0..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&process_unique);
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);
        ObjectId::from_bytes(bytes)
    }

    fn process_unique() -> [u8; 5] {
        let uuid = uuid::Uuid::new_v4();
        let uid = uuid.as_bytes();
        let rnd_byte = OsRng.gen::<u8>();

        [uid[0], uid[1], uid[2], uid[3], uid[uid.len() - 1] ^ rnd_byte]
    }
}
