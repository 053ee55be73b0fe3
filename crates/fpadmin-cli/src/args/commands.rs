use super::common::{ViewModeArgs, parse_selector};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage registered users (ユーザー)")]
    User {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage financial planners (FP)")]
    Fp {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage referral partners (パートナー)")]
    Partner {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage monthly matching allocations (マッチング割当)")]
    Allocation {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Track handed-over leads and their progress (マッチング履歴)")]
    History {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage user reviews of FPs (レビュー)")]
    Review {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage payment links (決済URL)")]
    PaymentUrl {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage subscription plans (サブスクリプションプラン)")]
    Plan {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage FAQ entries")]
    Faq {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage legal documents (規約・法務文書)")]
    Legal {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Manage ad banners (広告バナー)")]
    Banner {
        #[command(subcommand)]
        command: RecordCommand,
    },

    #[command(about = "Print the whole store as a JSON snapshot")]
    Export,

    #[command(about = "Show or initialize config.toml")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum RecordCommand {
    #[command(about = "Filter, sort and page through records")]
    List(ListArgs),

    #[command(about = "Show one record with its resolved references")]
    Show { id: String },

    #[command(about = "Create a record from a JSON draft")]
    Create {
        #[arg(
            long,
            help = "JSON object with the fields to set, or @FILE to read it from a file"
        )]
        data: String,
    },

    #[command(about = "Edit a record; without --data, print its current draft")]
    Edit {
        id: String,

        #[arg(
            long,
            help = "JSON object with the fields to change, or @FILE to read it from a file"
        )]
        data: Option<String>,
    },

    #[command(about = "Delete a record")]
    Delete { id: String },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[arg(long, help = "Case-insensitive substring over the searchable fields")]
    pub search: Option<String>,

    #[arg(long, help = "Status label or key, or 'all'")]
    pub status: Option<String>,

    #[arg(long, value_name = "FLAG", help = "Only records where FLAG holds (repeatable)")]
    pub only: Vec<String>,

    #[arg(
        long = "where",
        value_name = "FIELD=VALUE",
        value_parser = parse_selector,
        help = "Exact match on any field (repeatable)"
    )]
    pub selectors: Vec<(String, String)>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Lower bound on the entity's date")]
    pub since: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Upper bound on the entity's date")]
    pub until: Option<String>,

    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    #[arg(long, conflicts_with = "desc", help = "Sort ascending")]
    pub asc: bool,

    #[arg(long, help = "Sort descending")]
    pub desc: bool,

    #[arg(long)]
    pub page: Option<usize>,

    #[arg(long)]
    pub page_size: Option<usize>,

    #[command(flatten)]
    pub view: ViewModeArgs,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the config in effect")]
    Show,

    #[command(about = "Write the default config.toml if none exists")]
    Init,
}
