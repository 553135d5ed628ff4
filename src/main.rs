use clap::Parser;
use miette::Result;
use prdm::cli::{Cli, Commands};
use prdm::core::logging;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    logging::init(logging::level_for(global.verbose, global.quiet));

    match cli.command {
        Commands::Dashboard(args) => prdm::cli::commands::dashboard::run(args, &global),
        Commands::List(args) => prdm::cli::commands::list::run(args, &global),
        Commands::Show(args) => prdm::cli::commands::show::run(args, &global),
        Commands::Search(args) => prdm::cli::commands::search::run(args, &global),
        Commands::New(args) => prdm::cli::commands::new::run(args, &global),
        Commands::Update(args) => prdm::cli::commands::update::run(args, &global),
        Commands::Analytics(args) => prdm::cli::commands::analytics::run(args, &global),
        Commands::Export(args) => prdm::cli::commands::export::run(args, &global),
        Commands::Report(cmd) => prdm::cli::commands::report::run(cmd, &global),
        Commands::Demo(args) => prdm::cli::commands::demo::run(args, &global),
        Commands::Completions(args) => prdm::cli::commands::completions::run(args),
    }
}
