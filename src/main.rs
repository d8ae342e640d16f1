use std::env;
use std::fs;
use std::process;

use chordcodec::{decode_chord, encode_chord, CodecConfig, EncodingScheme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: chordcodec [--scheme major-minor|triad] encode <chord>...\n       chordcodec [--scheme major-minor|triad] decode <index>...\n       chordcodec --config <codec.yaml> encode|decode ...";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chordcodec=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut scheme = EncodingScheme::default();
    let mut rest = &args[..];

    // Parse flags
    while let Some(flag) = rest.first() {
        match flag.as_str() {
            "--scheme" => {
                let value = rest.get(1).unwrap_or_else(|| usage_error());
                scheme = match value.parse() {
                    Ok(scheme) => scheme,
                    Err(e) => fail(&e.to_string()),
                };
                rest = &rest[2..];
            }
            "--config" => {
                let path = rest.get(1).unwrap_or_else(|| usage_error());
                let content = match fs::read_to_string(path) {
                    Ok(content) => content,
                    Err(e) => fail(&format!("Error reading file '{}': {}", path, e)),
                };
                scheme = match CodecConfig::from_yaml(&content) {
                    Ok(config) => config.scheme,
                    Err(e) => fail(&e.to_string()),
                };
                rest = &rest[2..];
            }
            _ => break,
        }
    }

    let (command, values) = match rest.split_first() {
        Some((command, values)) if !values.is_empty() => (command.as_str(), values),
        _ => usage_error(),
    };

    match command {
        "encode" => {
            for label in values {
                match encode_chord(scheme, label) {
                    Ok(index) => println!("{}", index),
                    Err(e) => fail(&format!("Encoding error: {}", e)),
                }
            }
        }
        "decode" => {
            for value in values {
                let index: usize = match value.parse() {
                    Ok(index) => index,
                    Err(_) => fail(&format!("Not a class index: '{}'", value)),
                };
                match decode_chord(scheme, index) {
                    Ok(label) => println!("{}", label),
                    Err(e) => fail(&format!("Decoding error: {}", e)),
                }
            }
        }
        _ => usage_error(),
    }
}

fn usage_error() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
