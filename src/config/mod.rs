use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting for each name")]
pub struct CliConfig {
    #[arg(long, default_value = "Welcome", help = "Message stored by the greeter")]
    pub message: String,

    #[arg(
        long = "name",
        default_value = "World",
        help = "Name to greet; repeat to greet several in order"
    )]
    pub names: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
