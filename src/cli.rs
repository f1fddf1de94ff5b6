use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kizbot")]
#[command(author, version, about = "Telegram bot for requesting marking codes and creating payments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot in long polling mode (default)
    Run,

    /// Insert a user record into the users table
    AddUser {
        username: String,
        email: String,
        /// Price assigned to the user
        price: f64,
    },

    /// Render a list of codes into a PDF document
    RenderCodes {
        /// Output PDF path
        #[arg(short, long)]
        output: PathBuf,

        /// Read codes from this file, one per line, instead of the arguments
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Codes to render
        codes: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["kizbot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_user_args() {
        let cli = Cli::try_parse_from(["kizbot", "add-user", "ivan", "ivan@example.com", "199.5"]).unwrap();
        match cli.command {
            Some(Commands::AddUser { username, email, price }) => {
                assert_eq!(username, "ivan");
                assert_eq!(email, "ivan@example.com");
                assert_eq!(price, 199.5);
            }
            _ => panic!("expected add-user"),
        }
    }

    #[test]
    fn test_render_codes_args() {
        let cli = Cli::try_parse_from(["kizbot", "render-codes", "-o", "out.pdf", "111", "222"]).unwrap();
        match cli.command {
            Some(Commands::RenderCodes { output, input, codes }) => {
                assert_eq!(output, PathBuf::from("out.pdf"));
                assert!(input.is_none());
                assert_eq!(codes, vec!["111", "222"]);
            }
            _ => panic!("expected render-codes"),
        }
    }

    #[test]
    fn test_add_user_rejects_bad_price() {
        assert!(Cli::try_parse_from(["kizbot", "add-user", "ivan", "ivan@example.com", "cheap"]).is_err());
    }
}
