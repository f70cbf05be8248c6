use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{info, warn};

use promptkit::{
    Item, Logging, PROJECT_NAME, PROJECT_VERSION, PromptError, PromptKind, PromptOptions,
    Prompter, items_from_keys, load_registry, show_defaults,
    validators::{self, ItemListValidator, StringValidator},
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Command,

    /// Verbose
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults file layered over the built-in defaults
    #[arg(long, global = true, value_name = "PATH")]
    defaults: Option<PathBuf>,
}

/// Options shared by every prompt.
#[derive(Args)]
struct FormArgs {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Box width in columns, 0 for automatic
    #[arg(long)]
    width: Option<u16>,

    /// Height in rows, 0 for the terminal height
    #[arg(long)]
    height: Option<u16>,
}

impl FormArgs {
    fn into_options(self) -> PromptOptions {
        PromptOptions {
            title: self.title,
            description: self.description,
            width: self.width,
            height: self.height,
            ..PromptOptions::default()
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InputCheck {
    NotEmpty,
    Integer,
    Float,
}

impl InputCheck {
    fn validator(self) -> StringValidator {
        match self {
            Self::NotEmpty => StringValidator::new(validators::not_empty),
            Self::Integer => StringValidator::new(validators::integer),
            Self::Float => StringValidator::new(validators::float),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Read one line of text
    Input {
        #[command(flatten)]
        form: FormArgs,

        #[arg(long)]
        prefix: Option<String>,

        #[arg(long)]
        placeholder: Option<String>,

        /// Reject input that fails this check
        #[arg(long, value_enum)]
        check: Option<InputCheck>,
    },

    /// Choose one item (items from arguments or stdin, one per line)
    Select {
        #[command(flatten)]
        form: FormArgs,

        items: Vec<String>,
    },

    /// Choose any number of items
    #[command(visible_alias = "multi")]
    MultiSelect {
        #[command(flatten)]
        form: FormArgs,

        /// Require at least one item
        #[arg(long)]
        required: bool,

        items: Vec<String>,
    },

    /// Ask a yes/no question; exits 0 for yes and 1 for no
    Confirm {
        #[command(flatten)]
        form: FormArgs,

        #[arg(long)]
        yes_label: Option<String>,

        #[arg(long)]
        no_label: Option<String>,
    },

    /// Filter items as you type and pick one
    Search {
        #[command(flatten)]
        form: FormArgs,

        #[arg(long)]
        case_sensitive: bool,

        items: Vec<String>,
    },

    /// Show the defaults in effect for each prompt kind
    #[command(visible_alias = "show-defaults")]
    Defaults {
        /// Only show this kind
        #[arg(value_enum)]
        kind: Option<PromptKind>,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        Logging::new().with_debug_mode(true).start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        Logging::new().with_file(file_name).start()
    }
}

/// Items from the command line, or one per line from stdin when none were
/// given.
fn read_items(args: Vec<String>) -> Result<Vec<Item<String>>> {
    if !args.is_empty() {
        return Ok(items_from_keys(args));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No items given: pass them as arguments or pipe them on stdin");
    }

    let lines = stdin
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Unable to read items from stdin")?;
    info!("read {} items from stdin", lines.len());
    Ok(items_from_keys(lines))
}

fn run(command: Command, prompter: &mut Prompter) -> Result<ExitCode> {
    match command {
        Command::Input {
            form,
            prefix,
            placeholder,
            check,
        } => {
            let options = PromptOptions {
                prompt_prefix: prefix,
                placeholder,
                string_validator: check.map(InputCheck::validator),
                ..form.into_options()
            };
            println!("{}", prompter.input(&options)?);
        }
        Command::Select { form, items } => {
            let items = read_items(items)?;
            println!("{}", prompter.select(&form.into_options(), &items)?);
        }
        Command::MultiSelect {
            form,
            required,
            items,
        } => {
            let items = read_items(items)?;
            let options = PromptOptions {
                item_list_validator: required
                    .then(|| ItemListValidator::new(validators::at_least_one)),
                ..form.into_options()
            };
            for item in prompter.multi_select(&options, &items)? {
                println!("{item}");
            }
        }
        Command::Confirm {
            form,
            yes_label,
            no_label,
        } => {
            let options = PromptOptions {
                affirmative_label: yes_label,
                negative_label: no_label,
                ..form.into_options()
            };
            if !prompter.confirm(&options)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Search {
            form,
            case_sensitive,
            items,
        } => {
            let items = read_items(items)?;
            let options = PromptOptions {
                case_sensitive_filter: case_sensitive.then_some(true),
                ..form.into_options()
            };
            println!("{}", prompter.search(&options, &items)?);
        }
        Command::Defaults { kind } => show_defaults(prompter.registry(), kind),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = UserArgs::parse();

    init_logging(args.verbose)?;

    let registry = load_registry(args.defaults.as_deref())?;
    let mut prompter = Prompter::with_registry(registry);

    match run(args.command, &mut prompter) {
        Err(e) => match e.downcast_ref::<PromptError>() {
            Some(PromptError::Interrupted) => {
                warn!("interrupted");
                eprintln!("{}", "Interrupted".yellow());
                Ok(ExitCode::from(130))
            }
            Some(err) if err.is_cancellation() => {
                eprintln!("{}", err.to_string().yellow());
                Ok(ExitCode::FAILURE)
            }
            _ => Err(e),
        },
        ret => ret,
    }
}
