use crate::api::TrolleyApi;
use crate::args::{SessionCommand, SessionLine};
use crate::catalog::ProductSource;
use crate::cli::print;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::TrolleyConfig;
use crate::error::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "trolley> ";

pub struct SessionContext {
    pub config: TrolleyConfig,
    pub config_dir: PathBuf,
    pub show_badge: bool,
}

/// Run the interactive session until `quit` or end of input.
///
/// The basket lives inside `api` and therefore exactly as long as this loop:
/// there is deliberately no persistence between sessions.
pub fn run<C: ProductSource>(api: &mut TrolleyApi<C>, mut ctx: SessionContext) -> Result<()> {
    println!("{}", "Welcome to trolley.".bold());
    println!(
        "Type {} for commands, {} to leave.",
        "help".cyan(),
        "quit".cyan()
    );

    if ctx.show_badge {
        let currency = ctx.config.currency.clone();
        api.basket_mut()
            .subscribe(move |entries| print::print_badge(entries, &currency));
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match SessionLine::try_parse_from(line.split_whitespace()) {
                    Ok(parsed) => {
                        if handle(api, &mut ctx, parsed.command)? {
                            break;
                        }
                    }
                    // clap renders its own help/usage text, including for the
                    // auto-generated `help` command.
                    Err(e) => println!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Dispatch one parsed line. Returns `true` when the session should end.
fn handle<C: ProductSource>(
    api: &mut TrolleyApi<C>,
    ctx: &mut SessionContext,
    command: SessionCommand,
) -> Result<bool> {
    match command {
        SessionCommand::Browse => {
            if let Some(result) = report(api.browse()) {
                print::print_products(&result.listed_products, &ctx.config.currency);
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Show { id } => {
            if let Some(result) = report(api.show(id)) {
                if let Some(detail) = &result.detail {
                    print::print_detail(detail, &ctx.config.currency);
                }
            }
        }
        SessionCommand::Add { id } => {
            if let Some(result) = report(api.add(id)) {
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Rm { id } => {
            if let Some(result) = report(api.remove(id)) {
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Inc { id } => {
            if let Some(result) = report(api.increase(id)) {
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Dec { id } => {
            if let Some(result) = report(api.decrease(id)) {
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Basket => {
            if let Some(result) = report(api.basket_view()) {
                print::print_basket(
                    &result.basket_lines,
                    result.total_price.as_deref(),
                    &ctx.config.currency,
                );
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Clear => {
            if let Some(result) = report(api.clear()) {
                print::print_messages(&result.messages);
            }
        }
        SessionCommand::Config { key, value } => handle_config(ctx, key, value),
        SessionCommand::Quit => return Ok(true),
    }
    Ok(false)
}

fn handle_config(ctx: &mut SessionContext, key: Option<String>, value: Option<String>) {
    match (key, value) {
        (None, _) => {
            println!("base_url = {}", ctx.config.base_url);
            println!("currency = {}", ctx.config.currency);
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Ok(value) => println!("{} = {}", key, value),
            Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
        },
        (Some(key), Some(value)) => {
            let outcome = ctx
                .config
                .set(&key, &value)
                .and_then(|()| ctx.config.save(&ctx.config_dir));
            match outcome {
                Ok(()) => {
                    let mut messages = vec![CmdMessage::success(format!("Saved {}", key))];
                    if key == "base_url" {
                        messages.push(CmdMessage::info(
                            "base_url changes take effect next session",
                        ));
                    }
                    print::print_messages(&messages);
                }
                Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
            }
        }
    }
}

/// Command failures (unknown id, network trouble) end the command, not the
/// session.
fn report(outcome: Result<CmdResult>) -> Option<CmdResult> {
    match outcome {
        Ok(result) => Some(result),
        Err(e) => {
            print::print_messages(&[CmdMessage::error(e.to_string())]);
            None
        }
    }
}
