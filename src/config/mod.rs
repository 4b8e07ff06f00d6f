pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, Submission};

#[cfg(feature = "cli")]
mod cli {
    use crate::core::{LoginForm, RegistrationForm};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "signup-guard")]
    #[command(about = "Validate registration and login submissions against a local credential store")]
    pub struct CliConfig {
        /// Optional TOML configuration file; flags given here override it
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        #[arg(long, global = true)]
        pub store_dir: Option<String>,

        #[arg(long, global = true)]
        pub origin: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Submit the registration form
        Register {
            #[arg(long, default_value = "")]
            username: String,
            #[arg(long, default_value = "")]
            email: String,
            #[arg(long, default_value = "")]
            password: String,
            #[arg(long, default_value = "")]
            password_check: String,
            #[arg(long)]
            accept_terms: bool,
        },
        /// Submit the login form
        Login {
            #[arg(long, default_value = "")]
            username: String,
            #[arg(long, default_value = "")]
            password: String,
            /// Keep me logged in
            #[arg(long)]
            persist: bool,
        },
    }

    /// A parsed form submission.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Submission {
        Register(RegistrationForm),
        Login(LoginForm),
    }

    impl From<Command> for Submission {
        fn from(command: Command) -> Self {
            match command {
                Command::Register {
                    username,
                    email,
                    password,
                    password_check,
                    accept_terms,
                } => Submission::Register(RegistrationForm {
                    username,
                    email,
                    password,
                    password_check,
                    terms_accepted: accept_terms,
                }),
                Command::Login {
                    username,
                    password,
                    persist,
                } => Submission::Login(LoginForm {
                    username,
                    password,
                    persist,
                }),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_register_command() {
            let config = CliConfig::try_parse_from([
                "signup-guard",
                "--store-dir",
                "/tmp/store",
                "register",
                "--username",
                "user1",
                "--email",
                "user1@mail.com",
                "--password",
                "Str0ng!Pass#99",
                "--password-check",
                "Str0ng!Pass#99",
                "--accept-terms",
            ])
            .unwrap();

            assert_eq!(config.store_dir.as_deref(), Some("/tmp/store"));
            assert_eq!(config.origin, None);
            match Submission::from(config.command) {
                Submission::Register(form) => {
                    assert_eq!(form.username, "user1");
                    assert!(form.terms_accepted);
                }
                other => panic!("expected registration, got {:?}", other),
            }
        }

        #[test]
        fn test_parse_login_command_with_trailing_globals() {
            let config = CliConfig::try_parse_from([
                "signup-guard",
                "login",
                "--username",
                "user1",
                "--persist",
                "--origin",
                "staging",
            ])
            .unwrap();

            assert_eq!(config.origin.as_deref(), Some("staging"));
            assert_eq!(
                Submission::from(config.command),
                Submission::Login(LoginForm {
                    username: "user1".to_string(),
                    password: String::new(),
                    persist: true,
                })
            );
        }
    }
}
