use lambda_http::{run, service_fn, tracing, Error};
use std::env;

use store::dynamodb::DynamoDbStore;

mod error;
mod handler;
mod store;
mod types;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "ToDoTasks".to_string());
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    let store = DynamoDbStore::new(client, table_name);

    run(service_fn(|event| handler::handle(&store, event))).await
}
