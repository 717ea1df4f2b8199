pub mod chart;
pub mod forecast;
pub mod help;

use tracing::error;

/// Parse the CLI arguments, dispatch to a command, and report any failure
/// to the user. Returns the process exit code.
pub async fn handle_args(args: &[String]) -> i32 {
    if args.is_empty() {
        let _ = help::execute();
        return 1;
    }

    let command = args[0].as_str();
    let rest: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let result = match command {
        "chart" => chart::execute(&rest).await,
        "forecast" | "predict" => forecast::execute(&rest).await,
        "help" | "--help" | "-h" => help::execute(),
        unknown => Err(format!(
            "❌ Unknown command '{}'. Run `podlytics help` for usage.",
            unknown
        )),
    };

    if let Err(e) = result {
        error!("Command {} failed: {}", command, e);
        eprintln!("{}", e);
        return 1;
    }

    0
}
