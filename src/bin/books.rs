use lambda_runtime::Error;
use roster_functions::handlers::BookHandler;
use roster_functions::{runtime, Repository};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let (config, store) = runtime::bootstrap().await?;
    let books = Repository::new(store, config.books_table);

    runtime::serve(BookHandler::new(books)).await
}
