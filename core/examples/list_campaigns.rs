mod common;

fn main() -> Result<(), tremendous::ApiError> {
    let client = common::client_from_env();
    for campaign in client.campaigns().list()? {
        println!("{campaign:?}");
    }
    Ok(())
}
