use chrono::{NaiveDateTime, Utc};

// Clock abstracts the ambient current-time reader so that fine computation
// stays deterministic under test.
pub trait Clock: Sync + Send {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;
    use chrono::{Duration, NaiveDateTime};
    use crate::utils::clock::Clock;

    // ManualClock starts at a fixed instant and only moves when told to.
    pub struct ManualClock {
        now: Mutex<NaiveDateTime>,
    }

    impl ManualClock {
        pub fn starting_at(now: NaiveDateTime) -> Self {
            Self { now: Mutex::new(now) }
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock().expect("clock lock");
            *now = *now + by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> NaiveDateTime {
            *self.now.lock().expect("clock lock")
        }
    }
}
