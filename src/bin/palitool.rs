use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use pali_engine::{
    convert, convert_mixed, init_tracing, validate_mappings, ConvertOptions, Script, ALL_SCRIPTS,
};

#[derive(Parser)]
#[command(name = "palitool", about = "Pali transliteration between scripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text between scripts
    Convert {
        /// Target script code (e.g. deva, thai, latn)
        #[arg(long)]
        to: String,
        /// Source script code; omit to auto-detect per script run
        #[arg(long)]
        from: Option<String>,
        /// Log ambiguous-Roman and unconverted-output warnings
        #[arg(long)]
        check: bool,
        /// Text to convert; reads stdin line by line when omitted
        text: Option<String>,
    },

    /// Convert a file line by line
    Batch {
        /// Target script code
        #[arg(long)]
        to: String,
        /// Source script code; omit to auto-detect per script run
        #[arg(long)]
        from: Option<String>,
        /// Input file, one text per line
        input_file: String,
        /// Output file
        output_file: String,
    },

    /// List the supported scripts
    Scripts {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ScriptEntry {
    code: Script,
    name: &'static str,
    native_name: &'static str,
}

fn parse_script(code: &str) -> Script {
    code.parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    })
}

fn convert_line(line: &str, to: Script, from: Option<Script>, options: ConvertOptions) -> String {
    match from {
        Some(from) => convert(line, to, from, options),
        None => convert_mixed(line, to, options),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            to,
            from,
            check,
            text,
        } => {
            let to = parse_script(&to);
            let from = from.as_deref().map(parse_script);
            let options = ConvertOptions {
                check_roman_convert: check,
                check_unconverted: check,
            };
            if check {
                if let Err(e) = validate_mappings() {
                    eprintln!("{}", e);
                }
            }

            match text {
                Some(text) => println!("{}", convert_line(&text, to, from, options)),
                None => {
                    let stdin = io::stdin();
                    for line in stdin.lock().lines() {
                        let line = line.unwrap_or_else(|e| {
                            eprintln!("Failed to read stdin: {}", e);
                            process::exit(1);
                        });
                        println!("{}", convert_line(&line, to, from, options));
                    }
                }
            }
        }

        Command::Batch {
            to,
            from,
            input_file,
            output_file,
        } => {
            let to = parse_script(&to);
            let from = from.as_deref().map(parse_script);

            let input = fs::File::open(&input_file).unwrap_or_else(|e| {
                eprintln!("Failed to open input file {}: {}", input_file, e);
                process::exit(1);
            });
            let output = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(output);

            for line in BufReader::new(input).lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read line: {}", e);
                    process::exit(1);
                });
                let converted = convert_line(&line, to, from, ConvertOptions::default());
                writeln!(writer, "{}", converted).unwrap_or_else(|e| {
                    eprintln!("Failed to write output: {}", e);
                    process::exit(1);
                });
            }
        }

        Command::Scripts { json } => {
            let entries: Vec<ScriptEntry> = ALL_SCRIPTS
                .iter()
                .map(|&code| {
                    let info = code.info();
                    ScriptEntry {
                        code,
                        name: info.display_name,
                        native_name: info.native_name,
                    }
                })
                .collect();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries).expect("JSON serialization failed")
                );
            } else {
                for entry in entries {
                    println!("{:<6} {:<12} {}", entry.code, entry.name, entry.native_name);
                }
            }
        }
    }
}
