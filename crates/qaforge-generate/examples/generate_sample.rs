use qaforge_generate::constants::{DEFAULT_DOMAIN, DEFAULT_EMAIL_USERNAME_LENGTH};
use qaforge_generate::generators::{datetime, identifiers, network, numeric, phone, strings};
use qaforge_generate::{DateFormat, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut rng = rand::rng();

    println!("string:       {}", strings::alphanumeric(&mut rng, 12));
    println!(
        "email:        {}",
        strings::email(&mut rng, DEFAULT_DOMAIN, DEFAULT_EMAIL_USERNAME_LENGTH)
    );
    println!("date:         {}", datetime::date(&mut rng, DateFormat::DdMmmYyyy));
    println!("today:        {}", datetime::today());
    println!("phone (US):   {}", phone::number_default(&mut rng)?);
    println!("phone (BR):   {}", phone::number(&mut rng, "BR")?);
    println!("uuid:         {}", identifiers::uuid(&mut rng));
    println!("credit card:  {}", identifiers::credit_card_number(&mut rng));
    println!("ip:           {}", network::ip_address(&mut rng));
    println!("mac:          {}", network::mac_address(&mut rng));
    println!("gaussian:     {:.3}", numeric::gaussian(&mut rng, 0.0, 1.0));
    println!("sequence:     {:?}", numeric::unique_sequence(&mut rng, 1, 10, 4)?);

    Ok(())
}
