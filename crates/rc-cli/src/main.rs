//! CLI frontend for the Runecaster rune casting calculator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "runecaster",
    about = "Runecaster — mana cost, die escalation and exploding rolls for rune magic",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute circle, mana cost, and dice for a spell
    Cast {
        /// Runes in written order (e.g. VAS LOR FLAM)
        runes: Vec<String>,

        #[command(flatten)]
        caster: commands::CasterArgs,

        #[command(flatten)]
        rules: commands::RulesArgs,

        /// Ignore all constraints and report this mana cost
        #[arg(long, requires = "increase")]
        mana: Option<u64>,

        /// Escalation steps to apply when --mana is given
        #[arg(long, requires = "mana")]
        increase: Option<u32>,

        /// Roll the spell's dice after computing it
        #[arg(long)]
        roll: bool,

        #[command(flatten)]
        extra: commands::ExtraDiceArgs,

        /// Print the spell sheet as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a base die escalates over a number of steps
    Progression {
        /// Base die size (2, 4, 6, 8, 10, 12, 20, 100)
        #[arg(short, long, default_value = "8")]
        die: u32,

        /// Number of escalation steps
        #[arg(short, long, default_value = "0")]
        steps: u32,
    },

    /// Roll dice with the exploding-dice rule
    Roll {
        /// Formula such as "D20 + D6 + 3", or a progression such as "D8 → D10"
        formula: String,

        /// Flat bonus added to the total
        #[arg(short, long, default_value = "0")]
        bonus: u32,

        #[command(flatten)]
        extra: commands::ExtraDiceArgs,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rune catalog and its meanings
    Runes,

    /// Ask the suggestion service for a spell and cost it
    Suggest {
        /// What the spell should achieve
        #[arg(short, long)]
        intent: String,

        /// Requested spell circle (number of runes)
        #[arg(short, long, default_value = "3")]
        circle: u8,

        /// Recorded service answer (JSON) to replay
        #[arg(short, long)]
        response: PathBuf,

        #[command(flatten)]
        caster: commands::CasterArgs,

        #[command(flatten)]
        rules: commands::RulesArgs,

        /// Narrate the pronunciation
        #[arg(long)]
        narrate: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            runes,
            caster,
            rules,
            mana,
            increase,
            roll,
            extra,
            json,
        } => {
            let unbound = mana.zip(increase);
            commands::cast::run(
                &runes,
                &caster,
                &rules,
                unbound,
                roll.then_some(&extra),
                json,
            )
        }
        Commands::Progression { die, steps } => commands::progression::run(die, steps),
        Commands::Roll {
            formula,
            bonus,
            extra,
            json,
        } => commands::roll::run(&formula, bonus, &extra, json),
        Commands::Runes => commands::runes::run(),
        Commands::Suggest {
            intent,
            circle,
            response,
            caster,
            rules,
            narrate,
        } => commands::suggest::run(&intent, circle, &response, &caster, &rules, narrate),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
