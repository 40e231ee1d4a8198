use clap::Parser;

#[derive(Parser)]
#[command(name = "bedrock-probe")]
#[command(about = "Send a liveness probe to every invocable Amazon Bedrock model", long_about = None)]
pub struct Cli {
    /// AWS region to probe (e.g. us-east-1); prompted for when omitted
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS access key id; prompted for when omitted
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    /// AWS secret access key; prompted for when omitted
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_access_key: Option<String>,

    /// Custom endpoint URL (e.g. a VPC endpoint)
    #[arg(long)]
    pub endpoint_url: Option<String>,
}
