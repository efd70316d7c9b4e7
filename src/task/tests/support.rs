//! Shared fixtures for task unit tests.

use chrono::{DateTime, TimeZone, Utc};
use mockable::MockClock;
use rstest::fixture;

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus},
    ports::TaskIdGenerator,
};

/// 2024-01-01T12:00:00Z.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Clock frozen at [`fixed_time`].
#[fixture]
pub fn fixed_clock() -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(fixed_time());
    clock
}

/// Builds a stored task without going through the service.
pub fn stored_task(description: &str, status: TaskStatus) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        description: description.to_owned(),
        status,
        created_at: fixed_time(),
    })
}

/// Hands out the same identifier every time.
pub struct RepeatingIdGenerator(pub TaskId);

impl TaskIdGenerator for RepeatingIdGenerator {
    fn new_id(&self) -> TaskId {
        self.0
    }
}
