// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, OrderManager, OrderRepository, SchedulerConfig};
use prodcal_domain::{NewOrder, OrderId, OrderStatus, ProductionOrder};
use std::cell::RefCell;
use std::rc::Rc;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024-01-15);

/// Storage contents and failure switches shared between a test and its manager.
#[derive(Debug, Default)]
pub struct RepositoryState {
    pub stored: Option<Vec<ProductionOrder>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TestRepository(pub Rc<RefCell<RepositoryState>>);

impl TestRepository {
    pub fn with_orders(orders: Vec<ProductionOrder>) -> Self {
        let repository: Self = Self::default();
        repository.0.borrow_mut().stored = Some(orders);
        repository
    }

    pub fn stored(&self) -> Option<Vec<ProductionOrder>> {
        self.0.borrow().stored.clone()
    }

    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.0.borrow_mut().fail_writes = fail;
    }
}

#[derive(Debug)]
pub struct TestStorageError(&'static str);

impl std::fmt::Display for TestStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TestStorageError {}

impl OrderRepository for TestRepository {
    type Error = TestStorageError;

    fn load(&mut self) -> Result<Option<Vec<ProductionOrder>>, Self::Error> {
        let state = self.0.borrow();
        if state.fail_reads {
            return Err(TestStorageError("payload is not valid JSON"));
        }
        Ok(state.stored.clone())
    }

    fn save(&mut self, orders: &[ProductionOrder]) -> Result<(), Self::Error> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(TestStorageError("quota exceeded"));
        }
        state.stored = Some(orders.to_vec());
        state.writes += 1;
        Ok(())
    }
}

pub type TestManager = OrderManager<TestRepository, FixedClock>;

/// Builds a manager over `orders`, returning a handle on its storage.
pub fn create_test_manager(orders: Vec<ProductionOrder>) -> (TestManager, TestRepository) {
    let repository: TestRepository = TestRepository::with_orders(orders);
    let manager: TestManager = OrderManager::initialize(
        repository.clone(),
        FixedClock(TODAY),
        SchedulerConfig::default(),
    );
    (manager, repository)
}

pub fn create_test_order(id: &str, area: &str, start: Date, end: Date) -> ProductionOrder {
    ProductionOrder {
        id: OrderId::new(id),
        area: String::from(area),
        assignee: None,
        start,
        end,
        status: OrderStatus::Planned,
        color: String::from("hsl(var(--area-a))"),
        progress: 0,
    }
}

pub fn create_test_new_order(area: &str, start: Date, end: Date) -> NewOrder {
    NewOrder {
        area: String::from(area),
        assignee: Some(String::from("Jordan Lee")),
        start,
        end,
        status: OrderStatus::Planned,
        color: String::from("hsl(var(--area-a))"),
        progress: None,
    }
}

/// Area A holds one order on 2024-01-01..=2024-01-05.
pub fn create_single_order_manager() -> (TestManager, TestRepository) {
    create_test_manager(vec![create_test_order(
        "aaaa0001",
        "Area A",
        date!(2024-01-01),
        date!(2024-01-05),
    )])
}
