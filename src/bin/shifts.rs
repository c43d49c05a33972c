use lambda_runtime::Error;
use roster_functions::handlers::ShiftHandler;
use roster_functions::utils::logger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    roster_functions::runtime::serve(ShiftHandler::new()).await
}
