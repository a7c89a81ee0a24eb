use casekit_core::{
    capitalize, ellipsis, is_alpha, is_alphanumeric, is_numeric, pad_end, pad_start,
    rune_length, substring, words, CaseStyle,
};
use serde::Serialize;
use std::fmt::Display;

use crate::commands::{Commands, PadSide};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::*;

#[derive(Debug, Serialize)]
struct ClassReport {
    alpha: bool,
    numeric: bool,
    alphanumeric: bool,
}

#[derive(Serialize)]
struct ResultEnvelope<T> {
    result: T,
}

fn print_result<T: Serialize + Display>(json: bool, result: T) {
    if json {
        print_json(&ResultEnvelope { result });
    } else {
        println!("{result}");
    }
}

pub fn handle_command(command: Commands, config: &CliConfig) -> Result<(), CliError> {
    let json = config.json;
    match command {
        Commands::Words { text } => {
            let tokens = words(&text);
            if json {
                print_json(&tokens);
            } else {
                print_lines(&tokens);
            }
        }
        Commands::Case { style, text } => {
            let style: CaseStyle = style.parse()?;
            log::debug!("converting to {style} case");
            print_result(json, style.apply(&text));
        }
        Commands::Capitalize { text } => print_result(json, capitalize(&text)),
        Commands::Ellipsis { text, max_len } => {
            let max_len = max_len.unwrap_or(config.ellipsis_max_len);
            print_result(json, ellipsis(&text, max_len));
        }
        Commands::Substring {
            text,
            offset,
            length,
        } => {
            let length = length.unwrap_or_else(|| rune_length(&text));
            print_result(json, substring(text, offset, length));
        }
        Commands::Length { text } => print_result(json, rune_length(&text)),
        Commands::Classify { text } => {
            let report = ClassReport {
                alpha: is_alpha(&text),
                numeric: is_numeric(&text),
                alphanumeric: is_alphanumeric(&text),
            };
            if json {
                print_json(&report);
            } else {
                println!("alpha: {}", report.alpha);
                println!("numeric: {}", report.numeric);
                println!("alphanumeric: {}", report.alphanumeric);
            }
        }
        Commands::Pad {
            side,
            text,
            width,
            fill,
        } => {
            let fill = fill.as_deref().unwrap_or(&config.pad_fill);
            let padded = match side {
                PadSide::Start => pad_start(&text, width, fill),
                PadSide::End => pad_end(&text, width, fill),
            };
            print_result(json, padded);
        }
        Commands::InitConfig { path } => {
            CliConfig::default().save_to_file(&path)?;
            print_info(&format!("Wrote default config to {}", path.display()));
        }
    }
    Ok(())
}
