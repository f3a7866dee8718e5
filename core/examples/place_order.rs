mod common;

use tremendous::{
    ApiError, Nullable, OrderArgs, OrderDelivery, OrderDenomination, OrderPaymentArg,
    OrderRecipient, RewardArg,
};

fn main() -> Result<(), ApiError> {
    let client = common::client_from_env();

    let campaigns = client.campaigns().list()?;
    let Some(campaign) = campaigns.first() else {
        eprintln!("no campaigns available");
        return Ok(());
    };

    let args = OrderArgs {
        reward: RewardArg {
            campaign_id: Nullable::Value(campaign.id.clone()),
            recipient: OrderRecipient {
                name: "Testy McTesterson".to_string(),
                email: "testy@example.com".to_string(),
            },
            value: OrderDenomination {
                denomination: 1.0,
                currency_code: "USD".to_string(),
            },
            delivery: OrderDelivery {
                method: "LINK".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        payment: OrderPaymentArg {
            funding_source_id: "BALANCE".to_string(),
        },
        ..Default::default()
    };

    let order = client.orders().create(&args)?;
    println!("Created order: {order:?}");

    let fetched = client.orders().retrieve(&order.id)?;
    println!("Retrieved order: {fetched:?}");
    Ok(())
}
