mod common;

fn main() -> Result<(), tremendous::ApiError> {
    let client = common::client_from_env();
    for (i, order) in client.orders().list()?.iter().enumerate() {
        println!("Order {i}: {order:?}");
    }
    Ok(())
}
