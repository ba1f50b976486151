use anyhow::{Context, anyhow};
use crossterm::{
    event::{Event, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use vedit::cli::{self, CliArgs};
use vedit::config::EditorConfig;
use vedit::editor::{Editor, Outcome};
use vedit::ui::input::key_from_event;
use vedit::ui::renderer::TuiRenderer;

/// Application entry point: parse command-line arguments, set up logging and configuration,
/// open the file if one was given, run the event loop, and restore the terminal on exit.
///
/// # Returns
///
/// `Ok(())` when the editor signals quit, or an error if terminal setup, rendering or
/// event handling fails. The terminal is restored in both cases.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (before terminal setup)
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logging(&cli_args)?;

    let config = EditorConfig::load(cli_args.config.as_deref()).context("loading configuration")?;
    log::info!("starting with {:?}", config);

    let mut editor = Editor::with_config(config);
    if let Some(path) = &cli_args.file {
        if cli_args.exists() {
            editor
                .open_file(path)
                .with_context(|| format!("opening {}", path.display()))?;
        } else {
            // The first :w creates it
            log::info!("{} does not exist yet", path.display());
            editor.new_file(path);
        }
    }

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(&mut editor);

    // Leave alternate screen and disable raw mode
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(editor: &mut Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new().map_err(|e| anyhow!("creating renderer: {}", e))?;

    loop {
        renderer
            .draw(editor)
            .map_err(|e| anyhow!("drawing frame: {}", e))?;

        match read()? {
            Event::Key(key_event) => {
                let Some(key) = key_from_event(key_event) else {
                    continue;
                };
                if editor.handle_key(key) == Outcome::Quit {
                    log::info!("quit requested");
                    return Ok(());
                }
            }
            // Resize is picked up by the next draw
            _ => {}
        }
    }
}

/// Log to `--log-file` when given (default level info); otherwise stay silent unless
/// RUST_LOG asks for output, since stderr shares the screen with the editor.
fn init_logging(cli_args: &CliArgs) -> anyhow::Result<()> {
    match &cli_args.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }
    Ok(())
}
