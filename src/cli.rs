// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("econdash")
        .about("Personal expense and income tracking with dashboard analytics")
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_name("KIND")
                                .help("expense or income")
                                .required(true),
                        )
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .value_name("TITLE")
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .help("Positive amount")
                                .allow_hyphen_values(true)
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("CATEGORY"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("fixed, variable or extra")
                                .default_value("variable"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("DATE")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_name("KIND")
                                .help("Restrict to expense or income"),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("MONTH")
                                .help("Restrict to YYYY-MM"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_name("N")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete one transaction")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_name("KIND")
                                .required(true),
                        )
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .value_name("ID")
                                .value_parser(value_parser!(i64))
                                .required(true),
                        ),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Balance, today and month rollups, last transaction")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("DATE")
                        .help("Roll up as of this day instead of today"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("dashboard").about("Balance over time and category breakdowns"),
        ))
        .subcommand(
            Command::new("import").about("Import transactions from CSV").arg(
                Arg::new("path")
                    .long("path")
                    .value_name("FILE")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("export")
                .about("Export all transactions")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("csv or json")
                        .default_value("csv"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete every stored transaction")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .help("Skip the confirmation guard")
                        .action(ArgAction::SetTrue),
                ),
        )
}
