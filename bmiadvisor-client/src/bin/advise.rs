use std::error::Error;

use bmiadvisor_client::report;
use bmiadvisor_model::{measurement::Gender, wire::PredictionRequest};
use clap::Parser;

/// Ask a running BMI Advisor server for diet recommendations.
#[derive(Parser)]
struct Args {
    /// Base URL of the server
    #[arg(long, default_value = "http://127.0.0.1:5001")]
    url: String,

    /// Also ask for the classifier's diet plan
    #[arg(long)]
    diet_plan: bool,

    /// male or female
    gender: Gender,

    /// Height in centimeters
    height: f64,

    /// Weight in kilograms
    weight: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let client = bmiadvisor_client::create(args.url);
    let request = PredictionRequest {
        gender: args.gender,
        height: args.height,
        weight: args.weight,
    };

    println!("{}", report::advise(&client, &request, args.diet_plan).await?);
    Ok(())
}
