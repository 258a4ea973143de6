//! CLI entry point for nestjs-dto-codegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nestjs_dto_codegen::codegen::{synthesize_validators, FieldDescriptor, Naming};
use nestjs_dto_codegen::config::CodegenConfig;
use nestjs_dto_codegen::parser::{self, Datamodel};

#[derive(Parser)]
#[command(name = "nestjs-dto-codegen")]
#[command(about = "Generate NestJS DTO and entity classes from a Prisma DMMF datamodel")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to DMMF JSON file (overrides config)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Output directory the generated paths are rooted at (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every generated file to stdout
    Render,
    /// Print the paths that would be generated
    List,
    /// Inspect the datamodel (show fields and their create DTO validators)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = CodegenConfig::load(cli.config.as_deref())?;

    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    // Generated code goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Apply CLI overrides
    if let Some(schema) = cli.schema {
        config.schema_file = schema;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    config.validate()?;

    match cli.command.unwrap_or(Commands::Render) {
        Commands::Render => {
            info!("Generating code from DMMF: {:?}", config.schema_file);
            for file in nestjs_dto_codegen::generate(&config)? {
                println!("// {}", file.path.display());
                println!("{}", file.content);
            }
        }
        Commands::List => {
            for file in nestjs_dto_codegen::generate(&config)? {
                println!("{}", file.path.display());
            }
        }
        Commands::Inspect => {
            let json = std::fs::read_to_string(&config.schema_file)?;
            let datamodel = parser::parse_datamodel(&json)?;
            inspect_datamodel(&datamodel, &config);
        }
    }

    Ok(())
}

fn inspect_datamodel(datamodel: &Datamodel, config: &CodegenConfig) {
    let naming = Naming::new(config);

    println!("Parsed {} models:\n", datamodel.models.len());
    for model in &datamodel.models {
        println!("Model: {}", model.name);
        if let Some(db_name) = &model.db_name {
            println!("  Table: {}", db_name);
        }
        println!("  Fields:");
        for field in &model.fields {
            let list = if field.is_list { "[]" } else { "" };
            let optional = if field.is_required { "" } else { "?" };
            println!("    - {} {}{}{}", field.name, field.field_type, list, optional);

            let validators = synthesize_validators(&FieldDescriptor::from(field), |name| {
                naming.create_dto_name(name)
            });
            let rendered: Vec<String> = validators
                .iter()
                .map(|v| format!("@{}({})", v.name, v.value.as_deref().unwrap_or_default()))
                .collect();
            println!("      {}", rendered.join(" "));
        }
        println!();
    }

    if !datamodel.enums.is_empty() {
        println!("Enums:");
        for e in &datamodel.enums {
            let values: Vec<&str> = e.values.iter().map(|v| v.name.as_str()).collect();
            println!("  - {} {:?}", e.name, values);
        }
    }
}
