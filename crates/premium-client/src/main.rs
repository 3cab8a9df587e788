use std::process::ExitCode;

use clap::Parser;
use log::error;
use premium_client::{
    city_options, render_outcome, ApplicantForm, PredictError, PredictionClient,
    DEFAULT_OCCUPATION, DEFAULT_PREDICT_URL, OCCUPATIONS,
};

#[derive(Debug, Parser)]
#[command(
    name = "premium-predict",
    version,
    about = "Predict an insurance premium category for an applicant",
    long_about = "Collects applicant details, sends them to the premium prediction service\n\
        and prints the predicted category.\n\n\
        EXAMPLES:\n\
        \n  premium-predict --age 45 --weight 82 --height 1.72 --income-lpa 18 --city Pune\n\
        \n  premium-predict --smoker --city Other --occupation freelancer\n\
        \n  premium-predict --list-options"
)]
struct Cli {
    /// Prediction endpoint
    #[arg(long, env = "PREMIUM_API_URL", default_value = DEFAULT_PREDICT_URL)]
    url: String,

    /// Age in years (1-119)
    #[arg(long, default_value_t = 30)]
    age: u32,

    /// Weight in kg
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Height in meters (0.1-2.49)
    #[arg(long, default_value_t = 1.75)]
    height: f64,

    /// Annual income in LPA
    #[arg(long, default_value_t = 10.0)]
    income_lpa: f64,

    /// The applicant smokes
    #[arg(long)]
    smoker: bool,

    /// City; use "Other" for anything not listed
    #[arg(long, default_value = "Mumbai")]
    city: String,

    /// Occupation
    #[arg(long, default_value = DEFAULT_OCCUPATION)]
    occupation: String,

    /// Print the accepted cities and occupations, then exit
    #[arg(long)]
    list_options: bool,

    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn form(&self) -> ApplicantForm {
        ApplicantForm {
            age: self.age,
            weight: self.weight,
            height: self.height,
            income_lpa: self.income_lpa,
            smoker: self.smoker,
            city: self.city.clone(),
            occupation: self.occupation.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if cli.list_options {
        println!("Cities:");
        for city in city_options() {
            println!("  {}", city);
        }
        println!("Occupations:");
        for occupation in OCCUPATIONS {
            println!("  {}", occupation);
        }
        return ExitCode::SUCCESS;
    }

    let client = PredictionClient::new(&cli.url);
    let outcome = match cli.form().to_request() {
        Ok(request) => client.predict(&request).await,
        Err(e) => Err(PredictError::from(e)),
    };

    let rendered = render_outcome(&outcome);
    match outcome {
        Ok(_) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("prediction failed: {:?}", e);
            eprintln!("{}", rendered);
            ExitCode::FAILURE
        }
    }
}
