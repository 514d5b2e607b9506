use clap::{Parser, Subcommand};
use liftscript_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftscript")]
#[command(about = "Training program script compiler and validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a program JSON file to script notation
    Compile {
        /// Path to the program JSON file
        input: PathBuf,

        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Weight unit for the script (lb or kg)
        #[arg(long)]
        unit: Option<String>,

        /// Omit program and note comments
        #[arg(long)]
        no_comments: bool,

        /// Omit week headers
        #[arg(long)]
        no_week_headers: bool,

        /// Validate the compiled script and fail on any violation
        #[arg(long)]
        check: bool,
    },

    /// Validate a script file against the grammar
    Validate {
        /// Path to the script file
        input: PathBuf,
    },

    /// Round a target weight to one achievable with configured plates
    Round {
        /// Target weight in the configured unit
        target: f64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    liftscript_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Compile {
            input,
            output,
            unit,
            no_comments,
            no_week_headers,
            check,
        } => cmd_compile(&config, input, output, unit, no_comments, no_week_headers, check),
        Commands::Validate { input } => cmd_validate(input),
        Commands::Round { target } => cmd_round(&config, target),
    }
}

fn cmd_compile(
    config: &Config,
    input: PathBuf,
    output: Option<PathBuf>,
    unit: Option<String>,
    no_comments: bool,
    no_week_headers: bool,
    check: bool,
) -> Result<()> {
    let contents = std::fs::read_to_string(&input)?;
    let program: Program = serde_json::from_str(&contents)?;

    let mut generator = config.generator_config()?;
    if let Some(unit) = unit {
        generator.weight_unit = parse_unit(&unit)?;
    }
    if no_comments {
        generator.include_comments = false;
    }
    if no_week_headers {
        generator.include_week_headers = false;
    }

    let script = compile(&program, &generator);

    if check {
        let report = validate(&script);
        if !report.is_valid() {
            eprintln!("Compiled script failed validation:");
            for message in report.messages() {
                eprintln!("  - {}", message);
            }
            return Err(Error::ScriptInvalid(report.errors.len()));
        }
    }

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", script))?;
            println!("✓ Compiled {} to {}", program.name, path.display());
        }
        None => println!("{}", script),
    }

    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let contents = std::fs::read_to_string(&input)?;
    let report = validate(&contents);

    if report.is_valid() {
        println!("✓ Script is valid");
        return Ok(());
    }

    eprintln!("Script has {} error(s):", report.errors.len());
    for message in report.messages() {
        eprintln!("  - {}", message);
    }

    Err(Error::ScriptInvalid(report.errors.len()))
}

fn cmd_round(config: &Config, target: f64) -> Result<()> {
    let generator = config.generator_config()?;
    let unit = generator.weight_unit;
    let equipment = generator
        .equipment
        .unwrap_or_else(|| EquipmentConfig::new(unit, default_barbell(unit)));

    let target = Weight::from_f64(target);
    let rounded = equipment.round_weight(target);

    println!("Target:        {}{}", target, unit);
    println!("Achievable:    {}{}", rounded, unit);
    println!("Min increment: {}{}", equipment.min_increment(), unit);

    if equipment.can_achieve_weight(target) {
        println!("✓ Exact target is loadable");
    }

    Ok(())
}

fn default_barbell(unit: WeightUnit) -> Weight {
    match unit {
        WeightUnit::Lb => Weight::from_f64(45.0),
        WeightUnit::Kg => Weight::from_f64(20.0),
    }
}

fn parse_unit(s: &str) -> Result<WeightUnit> {
    match s.to_lowercase().as_str() {
        "lb" => Ok(WeightUnit::Lb),
        "kg" => Ok(WeightUnit::Kg),
        other => Err(Error::Config(format!("unknown weight unit: {:?}", other))),
    }
}
