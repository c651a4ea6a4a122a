use clap::Subcommand;

/// Fee record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeeCommands {
    /// Record a payment against a fee record.
    Pay {
        id: String,
        #[arg(long)]
        amount: f64,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}
