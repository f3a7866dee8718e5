mod common;

use tremendous::ListProductsOptions;

fn main() -> Result<(), tremendous::ApiError> {
    let client = common::client_from_env();
    let products = client.products().list(Some(&ListProductsOptions::country("US")))?;
    for (i, product) in products.iter().enumerate() {
        println!("Product {i}: {product:?}");
    }
    Ok(())
}
