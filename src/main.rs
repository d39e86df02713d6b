use enrollment_interface::app::EnrollmentInterface;
use enrollment_interface::client::ReqwestClient;
use enrollment_interface::config::EnrollmentConfig;
use enrollment_interface::credential::StaticCredential;
use enrollment_interface::error::{ErrorKind, Result};
use enrollment_interface::interface::{CredentialSource, EnrollmentApi, HttpClient};
use enrollment_interface::navigate::LogNavigator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 {
        println!(
            "usage: {} <base_url> info|enroll <course_key> [csrf_token]",
            args[0]
        );
        return Ok(());
    }

    let config = EnrollmentConfig::new(&args[1])?;
    let command = args[2].as_str();
    let course_key = args[3].as_str();

    // Without an explicit token the CSRF cookie set by the server is used
    match args.get(4) {
        Some(token) => {
            let client = ReqwestClient::new(config.clone()).await?;
            let enrollment = EnrollmentInterface::new(
                client,
                StaticCredential(token.clone()),
                LogNavigator,
                config.urls,
            );
            run(&enrollment, command, course_key).await
        }
        None => {
            let enrollment = EnrollmentInterface::connect(config, LogNavigator).await?;
            run(&enrollment, command, course_key).await
        }
    }
}

async fn run<A, C>(
    enrollment: &EnrollmentInterface<A, C, LogNavigator>,
    command: &str,
    course_key: &str,
) -> Result<()>
where
    A: EnrollmentApi,
    C: CredentialSource,
{
    match command {
        "info" => {
            let info = enrollment.enrollment_info(course_key).await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        "enroll" => {
            let outcome = enrollment.enroll(course_key).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        other => {
            return Err(ErrorKind::ConfigError(format!("unknown command: {other}")).into());
        }
    }
    Ok(())
}
