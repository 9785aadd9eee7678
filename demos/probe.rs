//! Print the format and dimensions of each argument as JSON lines.
//!
//! ```text
//! cargo run --example probe -- photo.jpg https://example.com/logo.png
//! IMGPROBE_STRICT=1 cargo run --example probe -- broken.gif
//! ```
//!
//! Failed inputs print `null`; their reasons are logged to stderr.

use imgprobe::{ErrorPolicy, ProbeBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let strict = std::env::var("IMGPROBE_STRICT").is_ok();
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: probe <path|url|data-uri>...");
        return Ok(());
    }

    let engine = ProbeBuilder::new()
        .with_mode(if strict {
            ErrorPolicy::FastFail
        } else {
            ErrorPolicy::Accumulate
        })
        .build()?;

    for (input, meta) in inputs.iter().zip(engine.probe_all(&inputs).await?) {
        match meta {
            Some(meta) => println!("{input}\t{}", meta.to_json()),
            None => println!("{input}\tnull"),
        }
    }

    Ok(())
}
