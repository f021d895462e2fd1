mod render;
mod significant;
mod strings;
mod utils;
mod validate;

use clap::{
    Parser,
    Subcommand,
};
use render::RenderArgs;
use significant::SignificantArgs;
use utils::UtilsArgs;
use validate::ValidateArgs;

pub(crate) trait PipelineCommand {
    fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()>;
}

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Print the full report: profile, behavioral summary, genomic table
    /// and significant genes.
    Render {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  RenderArgs,
    },

    /// List the genes flagged as clinically significant.
    Significant {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  SignificantArgs,
    },

    /// Check that report files can be loaded.
    Validate {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ValidateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(wild::args_os());

    match cli.command {
        MainMenu::Render { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Significant { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Validate { utils, args } => {
            utils.setup()?;
            args.run(&utils)?
        },
    }
    Ok(())
}
