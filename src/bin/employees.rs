use lambda_runtime::Error;
use roster_functions::handlers::EmployeeHandler;
use roster_functions::{runtime, Repository};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let (config, store) = runtime::bootstrap().await?;
    let employees = Repository::new(store, config.employees_table);

    runtime::serve(EmployeeHandler::new(employees)).await
}
