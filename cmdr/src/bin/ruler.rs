// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_ruler_cmdr::{CLIArg, RulerReport, handle_ruler_command, ui_str};
use r3bl_ruler_overlay::{CommonResult, TracingConfig, ok, try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;
    let as_json = cli_arg.global_options.json;

    if should_log {
        match try_initialize_logging_global(TracingConfig::new_file(None)) {
            // % is Display, ? is Debug.
            Ok(()) => tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg),
            Err(report) => eprintln!("{}", ui_str::logging_unavailable_msg(&report)),
        }
    }

    let exit_code = match handle_ruler_command(cli_arg.command) {
        Ok(report) => display_report(&report, as_json),
        Err(report) => {
            report_unrecoverable_errors(&report);
            1
        }
    };

    if should_log {
        tracing::debug!(message = "Stop logging...", exit_code = %exit_code);
    }

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    ok!()
}

/// Print the report, returning the process exit code.
fn display_report(report: &RulerReport, as_json: bool) -> i32 {
    if !as_json {
        println!("{report}");
        return 0;
    }
    match report.to_json() {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(error) => {
            report_unrecoverable_errors(&error);
            1
        }
    }
}

/// Unknown and unrecoverable errors: bad input or an unreadable settings file.
fn report_unrecoverable_errors(report: &miette::Report) {
    // % is Display, ? is Debug.
    tracing::error!(
        message = "Could not run ruler due to the following problem",
        error = ?report
    );

    eprintln!("{}", ui_str::unrecoverable_error_msg(report));
}
