use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use zigen_core::config::{AliasConversionConfig, ChaifenConfig, Profile};
use zigen_core::{build_chaifen, build_table, convert_aliases};

/// Builds root lookup tables for the input method from its text dictionaries.
#[derive(Parser, Debug)]
#[clap(name = "zigen", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Builds the root table (name, examples, key) of one dictionary variant.
    Table {
        #[clap(value_enum, default_value = "ll")]
        profile: Profile,
        /// Code table file (`<code>\t<root>`).
        #[clap(long)]
        code_table: Option<PathBuf>,
        /// Decomposition file (`<char>\t<roots>`).
        #[clap(long)]
        decomposition: Option<PathBuf>,
        /// Alias table applied to both inputs before parsing.
        #[clap(long)]
        aliases: Option<PathBuf>,
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Writes alias-normalized copies of a decomposition file and a code table.
    Convert {
        /// Directory holding PUAtoalias.txt, ll_map.txt and ll_div.txt.
        #[clap(long, default_value = "src/public/ll")]
        dir: PathBuf,
        /// Alias table (`<canonical>\t<alias>`).
        #[clap(long)]
        aliases: Option<PathBuf>,
        #[clap(long)]
        code_table: Option<PathBuf>,
        #[clap(long)]
        decomposition: Option<PathBuf>,
        #[clap(long)]
        code_table_out: Option<PathBuf>,
        #[clap(long)]
        decomposition_out: Option<PathBuf>,
    },

    /// Builds the per-character table (name, decomposition, full code).
    Chaifen {
        /// Directory holding ll_div.real.txt and ll_fullcode.txt.
        #[clap(long, default_value = "src/public/ll")]
        dir: PathBuf,
        #[clap(long)]
        decomposition: Option<PathBuf>,
        /// Full-code file (`<char>\t<code>`).
        #[clap(long)]
        full_code: Option<PathBuf>,
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn run(command: Command) -> zigen_core::Result<String> {
    match command {
        Command::Table {
            profile,
            code_table,
            decomposition,
            aliases,
            output,
        } => {
            let mut config = profile.config();
            if let Some(path) = code_table {
                config.code_table = path;
            }
            if let Some(path) = decomposition {
                config.decomposition = path;
            }
            if let Some(path) = output {
                config.output = path;
            }
            config.alias_table = aliases;
            let count = build_table(&config)?;
            Ok(format!("{} roots -> {}", count, config.output.display()))
        }
        Command::Convert {
            dir,
            aliases,
            code_table,
            decomposition,
            code_table_out,
            decomposition_out,
        } => {
            let mut config = AliasConversionConfig::in_dir(dir);
            if let Some(path) = aliases {
                config.alias_table = path;
            }
            if let Some(path) = code_table {
                config.code_table = path;
            }
            if let Some(path) = decomposition {
                config.decomposition = path;
            }
            if let Some(path) = code_table_out {
                config.code_table_out = path;
            }
            if let Some(path) = decomposition_out {
                config.decomposition_out = path;
            }
            let summary = convert_aliases(&config)?;
            Ok(format!(
                "{} and {} written ({} + {} lines)",
                config.decomposition_out.display(),
                config.code_table_out.display(),
                summary.decomposition_lines,
                summary.code_table_lines
            ))
        }
        Command::Chaifen {
            dir,
            decomposition,
            full_code,
            output,
        } => {
            let mut config = ChaifenConfig::in_dir(dir);
            if let Some(path) = decomposition {
                config.decomposition = path;
            }
            if let Some(path) = full_code {
                config.full_code = path;
            }
            if let Some(path) = output {
                config.output = path;
            }
            let count = build_chaifen(&config)?;
            Ok(format!("{} characters -> {}", count, config.output.display()))
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,zigen_core=info,zigen=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(summary) => {
            println!("{} {}", "done:".green().bold(), summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_conversion_path_has_its_own_flag() {
        let cli = Cli::try_parse_from([
            "zigen",
            "convert",
            "--aliases",
            "a.txt",
            "--code-table",
            "m.txt",
            "--decomposition",
            "d.txt",
            "--code-table-out",
            "m2.txt",
            "--decomposition-out",
            "d2.txt",
        ])
        .unwrap();
        match cli.command {
            Command::Convert { aliases, code_table_out, .. } => {
                assert_eq!(Some(PathBuf::from("a.txt")), aliases);
                assert_eq!(Some(PathBuf::from("m2.txt")), code_table_out);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn chaifen_inputs_can_be_overridden() {
        let cli = Cli::try_parse_from(["zigen", "chaifen", "--full-code", "f.txt"]).unwrap();
        match cli.command {
            Command::Chaifen { dir, full_code, decomposition, .. } => {
                assert_eq!(PathBuf::from("src/public/ll"), dir);
                assert_eq!(Some(PathBuf::from("f.txt")), full_code);
                assert_eq!(None, decomposition);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
