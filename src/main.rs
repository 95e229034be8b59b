use clap::Parser;
use prestacao_contas::cli::commands::{
    cmd_draft_clear, cmd_draft_show, cmd_generate, cmd_sections, cmd_validate,
};
use prestacao_contas::cli::config::{Cli, Commands, DraftAction, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            draft,
            section,
            output_dir,
        } => {
            // Resolve paths: CLI > config > defaults
            let draft = draft.unwrap_or_else(|| config.generate.draft.clone());
            let output_dir = output_dir.unwrap_or_else(|| config.generate.output_dir.clone());

            cmd_generate(
                &draft,
                section.as_deref(),
                &output_dir,
                &config.trace.file,
                cli.verbose,
            )?;
        }
        Commands::Validate { draft } => {
            let draft = draft.unwrap_or_else(|| config.generate.draft.clone());
            let all_passed = cmd_validate(&draft, &config.trace.file, cli.verbose)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Sections => {
            cmd_sections();
        }
        Commands::Draft { action } => match action {
            DraftAction::Show { file } => {
                let file = file.unwrap_or_else(|| config.generate.draft.clone());
                cmd_draft_show(&file)?;
            }
            DraftAction::Clear { file, yes } => {
                let file = file.unwrap_or_else(|| config.generate.draft.clone());
                cmd_draft_clear(&file, yes, &config.trace.file)?;
            }
        },
    }

    Ok(())
}
