use std::sync::Arc;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use provisio::config::Config;
use provisio::domain::ports::{NoopStatusLine, ProvisionEventSink, StatusLine};
use provisio::domain::value_objects::ProjectLayout;
use provisio::infrastructure::TracingEventSink;
use provisio::presentation::{
    create_formatter, create_provision_options, create_provision_use_case, Cli, CreateArgs,
    CREATE_OUTPUT_FORMATS,
};
use provisio::CancellationToken;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::provision::{render_outcome, ConsoleEventSink};
use crate::ui::widgets::status_line::SpinnerStatusLine;

/// `infra create` / `provision`
pub fn cmd_provision(cli: &Cli, args: &CreateArgs) -> Result<()> {
    let root = match &cli.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("resolving current directory")?,
    };

    let (config, warnings) = Config::load_or_default_with_warnings(Some(root.as_path()));
    let ui = UiContext::new(cli.output, cli.color, &config);
    print_config_warnings(&warnings, ui.color, ui.unicode);

    let formatter = create_formatter(cli.output, CREATE_OUTPUT_FORMATS)?;
    let interactive = is_interactive(cli, &config);

    let layout = ProjectLayout::new(root.clone());
    let use_case = create_provision_use_case(&layout, &config, interactive);
    let options = create_provision_options(
        root.clone(),
        cli.environment.clone(),
        interactive,
        args.no_progress,
        &config,
    );

    let cancel = install_interrupt_handler()?;

    let structured = formatter.kind().is_structured();
    let status_line: Arc<dyn StatusLine>;
    let events: Arc<dyn ProvisionEventSink>;
    if structured {
        status_line = Arc::new(NoopStatusLine);
        events = Arc::new(TracingEventSink);
    } else {
        let spinner = Arc::new(SpinnerStatusLine::new(ui));
        events = Arc::new(ConsoleEventSink::new(Arc::clone(&spinner), ui));
        status_line = spinner;
    }

    let outcome = use_case
        .execute_with_events(&options, formatter, status_line, events, &cancel)
        .context("provisioning Azure resources")?;

    if !structured {
        eprint!("{}", render_outcome(&outcome, &ui));
    }
    Ok(())
}

/// Prompts need a terminal on stdin and no `--no-prompt` from flags, env, or config.
fn is_interactive(cli: &Cli, config: &Config) -> bool {
    !cli.no_prompt && !config.provision.no_prompt && std::io::stdin().is_terminal()
}

/// First Ctrl+C cancels the running deployment; a second one exits immediately.
fn install_interrupt_handler() -> Result<CancellationToken> {
    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        if handler_token.is_cancelled() {
            std::process::exit(130);
        }
        handler_token.cancel();
    })
    .context("installing Ctrl+C handler")?;
    Ok(cancel)
}
