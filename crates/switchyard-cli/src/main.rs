use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use switchyard_core::{SpecError, SwitchSpec};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run inputs through a JSON-configured switch
#[derive(Debug, Parser)]
#[command(name = "switchyard-cli", version, about)]
struct Args {
    /// Rule table to load; `-` or nothing selects the built-in example
    spec: Option<PathBuf>,

    /// Inputs, parsed as JSON (anything else is taken as a string)
    #[arg(allow_negative_numbers = true)]
    inputs: Vec<String>,
}

/// 入力は JSON として解釈し、失敗したら文字列として扱う
fn parse_input(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn load_spec(path: Option<&Path>) -> Result<SwitchSpec, SpecError> {
    match path {
        Some(path) if path.as_os_str() != "-" => SwitchSpec::from_path(path),
        _ => Ok(SwitchSpec::example()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // (A) ルール表を読み込んで dispatcher を組み立てる
    let spec = match load_spec(args.spec.as_deref()) {
        Ok(spec) => spec,
        Err(e) => {
            error!(kind = ?e.kind(), "failed to load switch spec: {e}");
            return ExitCode::FAILURE;
        }
    };
    let switch = match spec.compile() {
        Ok(switch) => switch,
        Err(e) => {
            error!(kind = ?e.kind(), "failed to build switch: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(rules = spec.rules.len(), "switch ready");

    // (B) 入力（無指定ならサンプル）
    let inputs: Vec<Value> = if !args.inputs.is_empty() {
        args.inputs.iter().map(|raw| parse_input(raw)).collect()
    } else {
        vec![Value::from(-5), Value::from(0), Value::from(7)]
    };

    // (C) 1 つの dispatcher を共有して、入力ごとに task を起動
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let switch = switch.clone();
            tokio::spawn(async move {
                let output = switch.transform(&input);
                (input, output)
            })
        })
        .collect();

    // (D) 入力順に結果を表示
    for handle in handles {
        match handle.await {
            Ok((input, output)) => println!("{input} -> {output}"),
            Err(e) => {
                error!("transform task failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn input_falls_back_to_string() {
        assert_eq!(parse_input("-5"), Value::from(-5));
        assert_eq!(parse_input("[1,2]"), serde_json::json!([1, 2]));
        assert_eq!(parse_input("hello"), Value::from("hello"));
    }

    #[test]
    fn dash_selects_the_example_table() {
        assert_eq!(load_spec(Some(Path::new("-"))).unwrap(), SwitchSpec::example());
        assert_eq!(load_spec(None).unwrap(), SwitchSpec::example());
    }

    #[test]
    fn missing_spec_file_is_an_io_error() {
        let err = load_spec(Some(Path::new("/nonexistent/switch.json"))).unwrap_err();
        assert!(matches!(err, SpecError::Io(_)));
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn negative_inputs_are_values() {
        let args = Args::try_parse_from(["switchyard-cli", "-", "-5", "0", "hello"]).unwrap();
        assert_eq!(args.spec, Some(PathBuf::from("-")));
        assert_eq!(args.inputs, ["-5", "0", "hello"]);
    }

    #[test]
    fn help_after_separator_is_an_input() {
        let args = Args::try_parse_from(["switchyard-cli", "-", "--", "--help"]).unwrap();
        assert_eq!(args.inputs, ["--help"]);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["switchyard-cli", "--bogus"]).is_err());
    }
}
