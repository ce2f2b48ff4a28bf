use clap::{Command, Arg};

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("List the contacts currently shown")
}

pub(crate) fn show_cli() -> Command {
    Command::new("show")
        .about("Show the form fields and the selected contact")
}

pub(crate) fn add_cli() -> Command {
    Command::new("add")
        .about("Add a contact")
        .arg(
            Arg::new("NAME")
                .required(true)
                .help("Contact name"),
        )
        .arg(
            Arg::new("phone")
                .short('p')
                .long("phone")
                .help("Phone number"),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Email address"),
        )
}

pub(crate) fn edit_cli() -> Command {
    Command::new("edit")
        .about("Edit the selected contact, fields not given keep the form values")
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .help("New name"),
        )
        .arg(
            Arg::new("phone")
                .short('p')
                .long("phone")
                .help("New phone number"),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("New email address"),
        )
}

pub(crate) fn select_cli() -> Command {
    Command::new("select")
        .about("Select a listed contact by row number")
        .arg(
            Arg::new("ROW")
                .required(true)
                .value_parser(clap::value_parser!(usize))
                .help("Row number as printed by 'list'"),
        )
}

pub(crate) fn first_cli() -> Command {
    Command::new("first")
        .about("Select the first listed contact")
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete the selected contact")
}

pub(crate) fn search_cli() -> Command {
    Command::new("search")
        .about("Show only contacts whose name contains the keyword")
        .arg(
            Arg::new("KEYWORD")
                .required(true)
                .help("Part of a name, case is ignored"),
        )
}

pub(crate) fn reset_cli() -> Command {
    Command::new("reset")
        .about("Show all contacts again")
}

pub(crate) fn clear_cli() -> Command {
    Command::new("clear")
        .about("Clear the form fields")
}
