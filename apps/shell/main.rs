use clap::{error, Parser, ArgMatches, Command};
use log::LevelFilter;
use reedline::{Reedline, Signal};

mod prompt;
use prompt::MyPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
}
use cmds::contact_cmd;

use contacts::{
    configuration as cfg,
    logger,
    ContactStore,
    ContactStoreBuilder,
    Controller,
    Notice,
};

#[derive(Parser, Debug)]
#[command(name = "Contacts")]
#[command(version = "0.1")]
#[command(about = "Interactive address book shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Directory holding the contacts file
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<String>,

    /// Name of the contacts file
    #[arg(short, long, value_name = "NAME")]
    file: Option<String>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Append log output to this file instead of the console
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,
}

fn build_cli() -> Command {
    Command::new("contacts")
        .about("Interactive address book shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(contact_cmd::list_cli())
        .subcommand(contact_cmd::show_cli())
        .subcommand(contact_cmd::add_cli())
        .subcommand(contact_cmd::edit_cli())
        .subcommand(contact_cmd::select_cli())
        .subcommand(contact_cmd::first_cli())
        .subcommand(contact_cmd::delete_cli())
        .subcommand(contact_cmd::search_cli())
        .subcommand(contact_cmd::reset_cli())
        .subcommand(contact_cmd::clear_cli())
        .help_template("{subcommands}")
}

fn print_rows(controller: &Controller<ContactStore>) {
    let rows = controller.rows();
    if rows.is_empty() {
        println!("(no contacts)");
        return;
    }

    let selected = controller.selected_row();
    println!("    {:<4} {:<28} {:<18} {}", "#", "Name", "Phone", "Email");
    for (i, row) in rows.iter().enumerate() {
        let mark = if selected == Some(i) { "*" } else { " " };
        println!(" {}  {:<4} {:<28} {:<18} {}", mark, i + 1, row.name(), row.phone(), row.email());
    }
}

fn print_form(controller: &Controller<ContactStore>) {
    let form = controller.form();
    println!("Name : {}", form.name());
    println!("Phone: {}", form.phone());
    println!("Email: {}", form.email());
    match controller.selected_row() {
        Some(row) => println!("Selected row {}", row + 1),
        None => println!("No contact selected"),
    }
    if let Some(keyword) = controller.filter() {
        println!("Filter: '{}'", keyword);
    }
}

fn print_notice(notice: Notice) {
    match notice {
        Notice::Added => println!("[OK] Contact added."),
        Notice::Updated => println!("[OK] Contact updated."),
        Notice::Deleted => println!("[OK] Contact deleted."),
        Notice::Selected(row) => println!("[OK] Selected row {}.", row.saturating_add(1)),
        Notice::Filtered(count) => println!("[OK] {} matching contacts.", count),
        Notice::Reset(count) => println!("[OK] Showing all {} contacts.", count),
        Notice::MissingInformation => println!("Warning: please enter the required information."),
        Notice::MissingKeyword => println!("Info: please enter a name to search."),
        Notice::NoSelection => println!("Info: please select a contact first."),
        Notice::NoSuchRow(row) => println!("Info: no contact at row {}.", row.saturating_add(1)),
        Notice::Empty => println!("Info: no contacts to select."),
    }
}

fn execute_command(matches: ArgMatches, controller: &mut Controller<ContactStore>) {
    let result = match matches.subcommand() {
        Some(("list", _)) => {
            print_rows(controller);
            return;
        }
        Some(("show", _)) => {
            print_form(controller);
            return;
        }
        Some(("clear", _)) => {
            controller.clear_fields();
            return;
        }
        Some(("add", m)) => {
            let arg = |name: &str| m.get_one::<String>(name).cloned().unwrap_or_default();
            controller.form_mut()
                .set_name(&arg("NAME"))
                .set_phone(&arg("phone"))
                .set_email(&arg("email"));
            controller.add()
        }
        Some(("edit", m)) => {
            let form = controller.form_mut();
            if let Some(v) = m.get_one::<String>("name") {
                form.set_name(v);
            }
            if let Some(v) = m.get_one::<String>("phone") {
                form.set_phone(v);
            }
            if let Some(v) = m.get_one::<String>("email") {
                form.set_email(v);
            }
            controller.edit()
        }
        Some(("select", m)) => {
            // Rows are printed starting from 1.
            let row = m.get_one::<usize>("ROW").copied().unwrap_or_default();
            let Some(row) = row.checked_sub(1) else {
                println!("Info: rows are numbered from 1.");
                return;
            };
            Ok(controller.select(row))
        }
        Some(("first", _)) => Ok(controller.select_first()),
        Some(("delete", _)) => controller.delete(),
        Some(("search", m)) => {
            let keyword = m.get_one::<String>("KEYWORD").map(|v| v.as_str()).unwrap_or("");
            Ok(controller.search(keyword))
        }
        Some(("reset", _)) => Ok(controller.reset()),
        _ => {
            println!("Error: unsupported command");
            return;
        }
    };

    match result {
        Ok(notice) => {
            print_notice(notice);
            if !notice.is_warning() && !matches!(notice, Notice::Selected(_)) {
                print_rows(controller);
            }
        },
        Err(e) => eprintln!("Error: {e}"),
    }
}

fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return;
        }
    }
    if let Some(dir) = opts.data_dir.as_ref() {
        builder.with_data_dir(dir);
    }
    if let Some(name) = opts.file.as_ref() {
        builder.with_file_name(name);
    }
    match opts.log_level.as_deref().map(|v| v.parse::<LevelFilter>()) {
        Some(Ok(level)) => {
            builder.with_logger(level, opts.log_file.as_deref());
        },
        Some(Err(e)) => {
            eprintln!("Invalid log level: {e}");
            return;
        },
        None => if let Some(file) = opts.log_file.as_deref() {
            builder.with_log_file(file);
        },
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building configuration error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    logger::setup(cfg.log_level(), cfg.log_file());
    if cfg.log_file().is_some() {
        logger::revert_console_output();
    }

    let store = match ContactStoreBuilder::new().with_config(cfg.as_ref()).build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Opening contact store error: {e}");
            return;
        }
    };

    println!("Contacts are kept in {}", store.path().display());
    if !store.is_writable() {
        println!("Warning: the contacts file could not be read, changes will not be saved.");
    }
    let mut controller = Controller::new(store);
    let mut cli = build_cli();
    let mut rl = Reedline::create();
    let prompt = MyPrompt;

    println!("Welcome to interactive contacts shell. Type 'help' for commands, 'exit' to quit.\n");
    print_rows(&controller);

    loop {
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            break;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let Some(args) = shlex::split(input) else {
                    println!("Error: unbalanced quotes in '{}'", input);
                    continue;
                };

                if args.first().map(|v| v.as_str()) == Some("help") {
                    _ = match args.get(1).and_then(|v| cli.find_subcommand_mut(v)) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut controller),
                    Err(e) if e.kind() == error::ErrorKind::InvalidSubcommand => {
                        println!("Error: command not found: '{}'", input);
                    }
                    Err(e) => {
                        _ = e.print();
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    logger::teardown();
}
