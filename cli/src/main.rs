// Load a PSELF container and write out the section for this platform
//
// Usage: pself-cli <container.pself>

use std::io;
use std::process;

use pself::{Loader, Platform, SectionKind};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <container.pself>", args[0]);
        process::exit(1);
    }

    let container_path = &args[1];
    let data = std::fs::read(container_path)?;

    println!("Processing: {} ({} bytes)", container_path, data.len());

    let platform = Platform::current();
    let mut loader = Loader::new(data);
    let outcome = loader.load(platform);

    for msg in loader.feedback().messages() {
        println!("{}", msg.format_line());
    }

    match outcome {
        Ok(section) => {
            let file_name = output_name(section.kind);
            std::fs::write(&file_name, &section.content)?;
            println!(
                "Section '{}' written as {} ({} bytes, {})",
                section.name,
                file_name,
                section.content.len(),
                section.kind.name()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}

/// Destination name for an extracted payload, by section kind
fn output_name(kind: SectionKind) -> String {
    let ext = match kind {
        SectionKind::Elf => ".elf.pself",
        SectionKind::Pe => ".exe.pself",
        SectionKind::MachO => ".mach.pself",
    };
    format!("output{}", ext)
}
