//! `reviewer` 바이너리 진입점.

use reviewer::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    // stdout은 결과 전용으로 두고 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    let result = match action {
        CliAction::InspectConfig => composition
            .inspect_config_usecase()
            .execute()
            .map(|json| println!("{json}")),
        CliAction::RunTask(options) => composition
            .run_task_usecase()
            .execute(options)
            .await
            .map(|output| println!("{}", output.trim_end())),
        CliAction::ListModels(overrides) => {
            composition
                .list_models_usecase()
                .execute(&overrides)
                .await
                .map(|models| {
                    for model in models {
                        println!("{}\t{}", model.id, model.owned_by);
                    }
                })
        }
        CliAction::ReviewCi(options) => composition
            .review_ci_usecase()
            .execute(options)
            .await
            .map(|_| ()),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
