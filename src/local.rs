//! Runs gateway events through the handlers in-process, for local testing
//! without a Lambda runtime.

use crate::config::StoreConfig;
use crate::core::gateway::{GatewayRequest, GatewayResponse};
use crate::core::repository::Repository;
use crate::domain::model::{Book, Employee};
use crate::domain::ports::{Handler, ItemStore};
use crate::handlers::{BookHandler, EmployeeHandler, HandlerKind, ShiftHandler};
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Records to load before running an event, in their JSON wire form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub employees: Vec<Employee>,
    pub books: Vec<Book>,
}

impl SeedData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub struct LocalRunner<S: ItemStore> {
    employee_records: Repository<Employee, S>,
    book_records: Repository<Book, S>,
    employees: EmployeeHandler<S>,
    books: BookHandler<S>,
    shifts: ShiftHandler,
}

impl<S: ItemStore> LocalRunner<S> {
    pub fn new(store: Arc<S>, config: &StoreConfig) -> Self {
        let employee_records: Repository<Employee, S> =
            Repository::new(Arc::clone(&store), config.employees_table.clone());
        let book_records: Repository<Book, S> = Repository::new(store, config.books_table.clone());

        Self {
            employees: EmployeeHandler::new(employee_records.clone()),
            books: BookHandler::new(book_records.clone()),
            shifts: ShiftHandler::new(),
            employee_records,
            book_records,
        }
    }

    /// Inserts seed records as-is, bypassing request validation. Returns how many were written.
    pub async fn seed(&self, data: &SeedData) -> Result<usize> {
        for employee in &data.employees {
            self.employee_records.insert(employee).await?;
        }
        for book in &data.books {
            self.book_records.insert(book).await?;
        }

        let count = data.employees.len() + data.books.len();
        tracing::info!("Seeded {} records", count);
        Ok(count)
    }

    pub async fn invoke(&self, kind: HandlerKind, request: GatewayRequest) -> GatewayResponse {
        match kind {
            HandlerKind::Employees => self.employees.handle(request).await,
            HandlerKind::Books => self.books.handle(request).await,
            HandlerKind::Shifts => self.shifts.handle(request).await,
        }
    }
}
