//! parking_bringup CLI

use clap::{Parser, Subcommand};
use parking_bringup::camera::CAM_TYPE_ENV;
use parking_bringup::description::LaunchAction;
use parking_bringup::generate_record;
use parking_bringup::pipeline::compose_from_selector;
use parking_bringup::substitution::LaunchContext;
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "parking_bringup")]
#[command(about = "Launch composer for the parking perception camera pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the pipeline and write a replayable record.json
    Compose {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Camera backend: fb, usb, or anything else for the MIPI camera
        #[arg(long, env = CAM_TYPE_ENV)]
        cam_type: Option<String>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// Print the composed pipeline without resolving packages
    Topology {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Camera backend: fb, usb, or anything else for the MIPI camera
        #[arg(long, env = CAM_TYPE_ENV)]
        cam_type: Option<String>,
    },
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Compose {
            args,
            cam_type,
            output,
        } => compose_and_write(cam_type.as_deref(), args, &output),
        Commands::Topology { args, cam_type } => {
            print_topology(cam_type.as_deref(), args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn compose_and_write(
    selector: Option<&str>,
    args: Vec<(String, String)>,
    output: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = LaunchContext::with_overrides(args);
    let record = generate_record(selector, &mut context)?;

    let json = record.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Generated record.json: {}", output.display());
    log::info!(
        "  {} includes, {} nodes",
        record.include.len(),
        record.node.len()
    );

    Ok(())
}

fn print_topology(selector: Option<&str>, args: Vec<(String, String)>) {
    let context = LaunchContext::with_overrides(args);
    let description = compose_from_selector(selector);

    for action in description.iter() {
        match action {
            LaunchAction::DeclareArgument(arg) => {
                let value = context
                    .get_configuration(&arg.name)
                    .unwrap_or_else(|| arg.default.clone());
                println!("arg      {}:={}  ({})", arg.name, value, arg.description);
            }
            LaunchAction::Include(include) => {
                print!("include  {}/launch/{}", include.package, include.launch_file);
                for (name, expr) in &include.launch_arguments {
                    print!(" {}:={}", name, expr);
                }
                println!();
            }
            LaunchAction::Node(node) => {
                print!("node     {}/{}", node.package, node.executable);
                for (name, expr) in &node.parameters {
                    print!(" {}:={}", name, expr);
                }
                println!();
            }
        }
    }
}
