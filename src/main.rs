use clap::Parser;
use lmc_ide::utils::{logger, validation::Validate};
use lmc_ide::{CliConfig, Console, IdeEngine};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 設定錯誤時尚未初始化日誌，直接輸出到 stderr
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(&settings.log_level, settings.json_logs());
    tracing::debug!("Effective settings: {:?}", settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut engine = IdeEngine::new_with_monitoring(console, settings.session_stats);

    match engine.run() {
        Ok(summary) => {
            tracing::debug!("Session ended after {} iterations", summary.iterations);
        }
        Err(e) => {
            tracing::error!(
                "❌ IDE session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
